use std::sync::Arc;

use tracing::info;

use crate::{
    domain::common::{BmiReportConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        pdf::PdfDocumentConverter, reference::CsvReferenceTable, template::MiniJinjaRenderer,
    },
};

pub type BmiReportService = Service;

/// Wire the production adapters. A missing or unreadable reference table does not
/// stop startup; the service then answers every lookup with a miss.
pub fn create_service(config: BmiReportConfig) -> Result<BmiReportService, CoreError> {
    let reference_table = CsvReferenceTable::load(&config.reference.csv_path);
    let template_renderer = MiniJinjaRenderer::new()?;
    let document_converter = PdfDocumentConverter::new(config.report.document_title);

    let service = Service::new(
        Arc::new(reference_table),
        Arc::new(template_renderer),
        Arc::new(document_converter),
    );

    info!(
        reference_rows = service.reference_rows(),
        "bmi report service ready"
    );

    Ok(service)
}
