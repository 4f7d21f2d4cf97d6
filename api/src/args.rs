use std::path::PathBuf;

use bmi_report_core::domain::common::{BmiReportConfig, ReferenceConfig, ReportConfig};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "bmi-report", version, about = "BMI calculator and report API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub reference: ReferenceArgs,

    #[command(flatten)]
    pub report: ReportArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/bmi`. Empty serves from `/`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ReferenceArgs {
    /// CSV file holding one recommendation row per BMI category.
    #[arg(
        long = "reference-csv",
        env = "REFERENCE_CSV_PATH",
        default_value = "data/BMI_Diet_Recommendations.csv"
    )]
    pub csv_path: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ReportArgs {
    /// Title stored in the generated PDF metadata.
    #[arg(long = "report-title", env = "REPORT_TITLE", default_value = "BMI Report")]
    pub title: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for BmiReportConfig {
    fn from(args: Args) -> Self {
        BmiReportConfig {
            reference: ReferenceConfig {
                csv_path: args.reference.csv_path,
            },
            report: ReportConfig {
                document_title: args.report.title,
            },
        }
    }
}
