use axum::extract::State;
use bmi_report_core::domain::{
    bmi::{entities::Category, ports::BmiService},
    recommendation::entities::RecommendationRecord,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::info;
use utoipa::ToSchema;

use crate::application::http::{
    bmi::validators::ComputeBmiValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ComputeBmiResponse {
    #[schema(value_type = f64)]
    pub height: Number,
    #[schema(value_type = f64)]
    pub weight: Number,
    pub current_date: String,
    pub bmi: Option<f64>,
    pub category: Category,
    pub recommendations_bmi: RecommendationRecord,
}

#[utoipa::path(
    post,
    path = "/",
    tag = "bmi",
    summary = "Compute BMI",
    description = "Computes the BMI for a height (m) and weight (kg), classifies it and returns the recommendations for its category.",
    request_body = ComputeBmiValidator,
    responses(
        (status = 200, body = ComputeBmiResponse),
        (status = 400, description = "Invalid JSON data, or height and weight are not numbers", body = ApiErrorResponse),
        (status = 422, description = "No recommendations available for the category", body = ApiErrorResponse)
    )
)]
pub async fn compute_bmi(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ComputeBmiValidator>,
) -> Result<Response<ComputeBmiResponse>, ApiError> {
    let measurements = payload.into_measurements()?;

    let assessment = state
        .service
        .compute_bmi(measurements.input)
        .map_err(ApiError::from)?;

    info!(
        bmi = ?assessment.bmi,
        category = %assessment.category,
        "bmi assessment returned"
    );

    Ok(Response::OK(ComputeBmiResponse {
        height: measurements.height,
        weight: measurements.weight,
        current_date: assessment.current_date,
        bmi: assessment.bmi,
        category: assessment.category,
        recommendations_bmi: assessment.recommendations_bmi,
    }))
}
