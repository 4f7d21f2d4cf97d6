use axum::{extract::State, response::Html};
use bmi_report_core::domain::bmi::ports::BmiService;
use tracing::error;

use crate::application::http::server::{
    api_entities::api_error::{ApiError, ApiErrorResponse},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/",
    tag = "bmi",
    summary = "BMI input form",
    description = "HTML page with the height/weight form. It posts to this API and offers the PDF report download.",
    responses(
        (status = 200, description = "HTML form", content_type = "text/html", body = String),
        (status = 500, body = ApiErrorResponse)
    )
)]
pub async fn bmi_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = state
        .service
        .render_form(&state.args.server.root_path)
        .map_err(|e| {
            error!(error = %e, "failed to render bmi form");
            ApiError::InternalServerError("Failed to render page".to_string())
        })?;

    Ok(Html(page))
}
