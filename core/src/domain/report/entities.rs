use bytes::Bytes;

pub const FORM_TEMPLATE: &str = "bmi.html";
pub const REPORT_TEMPLATE: &str = "report.md.j2";

pub const REPORT_FILENAME: &str = "BMI_Report.pdf";
pub const REPORT_CONTENT_TYPE: &str = "application/pdf";

/// A rendered report ready to be sent as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Bytes,
}

impl ReportDocument {
    pub fn pdf(bytes: Vec<u8>) -> Self {
        Self {
            filename: REPORT_FILENAME.to_string(),
            content_type: REPORT_CONTENT_TYPE,
            bytes: Bytes::from(bytes),
        }
    }

    /// Header value forcing a download instead of inline display.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}
