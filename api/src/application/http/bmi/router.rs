use super::handlers::{
    bmi_form::{__path_bmi_form, bmi_form},
    compute_bmi::{__path_compute_bmi, compute_bmi},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(bmi_form, compute_bmi))]
pub struct BmiApiDoc;

pub fn bmi_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/", state.args.server.root_path),
        get(bmi_form).post(compute_bmi),
    )
}
