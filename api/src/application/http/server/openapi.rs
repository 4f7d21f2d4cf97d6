use crate::application::http::{
    bmi::router::BmiApiDoc, health::router::HealthApiDoc, report::router::ReportApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(title = "BMI Report API"))]
pub struct ApiDoc;

impl ApiDoc {
    /// Root document with every feature's paths merged in.
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(BmiApiDoc::openapi());
        openapi.merge(ReportApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
