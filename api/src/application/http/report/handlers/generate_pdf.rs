use axum::{
    body::Bytes,
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use bmi_report_core::domain::report::ports::ReportService;
use tracing::{error, info};

use crate::application::http::{
    report::validators::GeneratePdfValidator,
    server::{
        api_entities::api_error::{ApiError, ApiErrorResponse, ValidateJson},
        app_state::AppState,
    },
};

pub const PDF_GENERATION_FAILED: &str = "Failed to generate PDF";

#[utoipa::path(
    post,
    path = "/generate-pdf",
    tag = "report",
    summary = "Generate PDF report",
    description = "Renders a previously computed BMI result as a downloadable PDF. Missing fields are shown as N/A.",
    request_body = GeneratePdfValidator,
    responses(
        (status = 200, description = "PDF attachment", content_type = "application/pdf", body = Vec<u8>),
        (status = 400, description = "Invalid JSON data", body = ApiErrorResponse),
        (status = 500, description = "Failed to generate PDF", body = ApiErrorResponse)
    )
)]
pub async fn generate_pdf(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GeneratePdfValidator>,
) -> Result<impl IntoResponse, ApiError> {
    let input = payload.into_input();
    let service = state.service.clone();

    let document = tokio::task::spawn_blocking(move || service.generate_report(input))
        .await
        .map_err(|e| {
            error!(error = %e, "report generation task failed");
            ApiError::InternalServerError(PDF_GENERATION_FAILED.to_string())
        })?
        .map_err(|e| {
            error!(error = %e, "failed to generate report");
            ApiError::InternalServerError(PDF_GENERATION_FAILED.to_string())
        })?;

    info!(size = document.bytes.len(), "report generated");

    let headers = [
        (CONTENT_TYPE, document.content_type.to_string()),
        (CONTENT_DISPOSITION, document.content_disposition()),
    ];
    let body: Bytes = document.bytes;

    Ok((headers, body))
}
