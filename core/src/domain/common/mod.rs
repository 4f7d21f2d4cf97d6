use std::path::PathBuf;

use chrono::Local;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct BmiReportConfig {
    pub reference: ReferenceConfig,
    pub report: ReportConfig,
}

#[derive(Clone, Debug)]
pub struct ReferenceConfig {
    pub csv_path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub document_title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            document_title: "BMI Report".to_string(),
        }
    }
}

/// Server-local calendar date formatted as `YYYY-MM-DD`.
pub fn current_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
