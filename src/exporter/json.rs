// file: src/exporter/json.rs
// description: json rendering of a successful run report

use crate::error::Result;
use crate::models::RunReport;
use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

#[derive(Debug, Serialize)]
pub struct ExportedReport<'a> {
    pub generated_at: String,
    #[serde(flatten)]
    pub report: &'a RunReport,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn render(&self, report: &RunReport) -> Result<String> {
        let exported = ExportedReport {
            generated_at: Local::now().to_rfc3339(),
            report,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&exported)?
        } else {
            serde_json::to_string(&exported)?
        };

        Ok(json)
    }
}
