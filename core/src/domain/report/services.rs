use tracing::{debug, error};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    report::{
        entities::{REPORT_TEMPLATE, ReportDocument},
        ports::ReportService,
        value_objects::ReportInput,
    },
};

impl ReportService for Service {
    fn generate_report(&self, input: ReportInput) -> Result<ReportDocument, CoreError> {
        let fields = serde_json::to_value(&input)
            .map_err(|e| CoreError::TemplateRender(format!("invalid report fields: {}", e)))?;

        let markup = self
            .template_renderer
            .render(REPORT_TEMPLATE, &fields)
            .inspect_err(|e| error!(error = %e, "report template rendering failed"))?;

        let bytes = self
            .document_converter
            .convert(&markup)
            .inspect_err(|e| error!(error = %e, "report conversion failed"))?;

        debug!(
            category = %input.category,
            size_bytes = bytes.len(),
            "report generated"
        );

        Ok(ReportDocument::pdf(bytes))
    }
}
