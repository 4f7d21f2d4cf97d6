use super::handlers::generate_pdf::{__path_generate_pdf, generate_pdf};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_pdf))]
pub struct ReportApiDoc;

pub fn report_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/generate-pdf", state.args.server.root_path),
        post(generate_pdf),
    )
}
