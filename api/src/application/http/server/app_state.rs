use std::sync::Arc;

use bmi_report_core::application::BmiReportService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<BmiReportService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BmiReportService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}
