#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc};

use axum_test::TestServer;
use bmi_report_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::{Args, LogArgs, ReferenceArgs, ReportArgs, ServerArgs},
};
use bmi_report_core::{
    application::BmiReportService,
    domain::{
        common::{entities::app_errors::CoreError, services::Service},
        report::ports::DocumentConverter,
    },
    infrastructure::{
        pdf::PdfDocumentConverter, reference::CsvReferenceTable, template::MiniJinjaRenderer,
    },
};

pub fn reference_csv() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/BMI_Diet_Recommendations.csv")
}

pub fn args(csv_path: PathBuf, root_path: &str) -> Arc<Args> {
    Arc::new(Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: root_path.to_string(),
            allowed_origins: vec!["http://localhost:5000".to_string()],
        },
        reference: ReferenceArgs { csv_path },
        report: ReportArgs {
            title: "BMI Report".to_string(),
        },
        log: LogArgs {
            filter: "debug".to_string(),
            json: false,
        },
    })
}

/// Converter that always fails, standing in for a broken PDF backend.
pub struct FailingConverter;

impl DocumentConverter for FailingConverter {
    fn convert(&self, _markup: &str) -> Result<Vec<u8>, CoreError> {
        Err(CoreError::DocumentConversion("converter unavailable".to_string()))
    }
}

pub fn service_with(
    csv_path: PathBuf,
    converter: Arc<dyn DocumentConverter>,
) -> BmiReportService {
    Service::new(
        Arc::new(CsvReferenceTable::load(csv_path)),
        Arc::new(MiniJinjaRenderer::new().unwrap()),
        converter,
    )
}

pub fn server_with(args: Arc<Args>, service: BmiReportService) -> TestServer {
    let state = AppState::new(args, service);
    TestServer::new(router(state).unwrap()).unwrap()
}

pub fn server() -> TestServer {
    let service = service_with(
        reference_csv(),
        Arc::new(PdfDocumentConverter::new("BMI Report")),
    );
    server_with(args(reference_csv(), ""), service)
}
