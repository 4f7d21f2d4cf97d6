use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    report::{entities::ReportDocument, value_objects::ReportInput},
};

/// Template engine seam: fills a named template with the given fields.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template_name: &str, fields: &Value) -> Result<String, CoreError>;
}

/// Document conversion seam: turns rendered markup into document bytes.
#[cfg_attr(test, mockall::automock)]
pub trait DocumentConverter: Send + Sync {
    fn convert(&self, markup: &str) -> Result<Vec<u8>, CoreError>;
}

pub trait ReportService: Send + Sync {
    fn generate_report(&self, input: ReportInput) -> Result<ReportDocument, CoreError>;
}
