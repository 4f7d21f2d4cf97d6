use axum::extract::State;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthCheckResponse {
    pub status: String,
    /// Rows in the reference table. Zero means the table failed to load.
    pub reference_rows: usize,
    pub timestamp: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Health check",
    responses(
        (status = 200, body = HealthCheckResponse)
    )
)]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Response<HealthCheckResponse>, ApiError> {
    Ok(Response::OK(HealthCheckResponse {
        status: "healthy".to_string(),
        reference_rows: state.service.reference_rows(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}
