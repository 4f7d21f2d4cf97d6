use std::sync::Arc;

use crate::domain::{
    recommendation::ports::ReferenceTable,
    report::ports::{DocumentConverter, TemplateRenderer},
};

/// Entry point of the domain. Every collaborator is injected once at startup and
/// shared read-only between requests.
#[derive(Clone)]
pub struct Service {
    pub(crate) reference_table: Arc<dyn ReferenceTable>,
    pub(crate) template_renderer: Arc<dyn TemplateRenderer>,
    pub(crate) document_converter: Arc<dyn DocumentConverter>,
}

impl Service {
    pub fn new(
        reference_table: Arc<dyn ReferenceTable>,
        template_renderer: Arc<dyn TemplateRenderer>,
        document_converter: Arc<dyn DocumentConverter>,
    ) -> Self {
        Self {
            reference_table,
            template_renderer,
            document_converter,
        }
    }

    pub fn reference_rows(&self) -> usize {
        self.reference_table.row_count()
    }
}
