use crate::domain::ports::{ReportRenderer, Storage};
use crate::domain::report::Report;
use crate::utils::error::Result;

pub const DEFAULT_REPORT_FILENAME: &str = "report.json";

/// Writes the report as pretty JSON for a front-end to pick up.
pub struct JsonReportRenderer<S: Storage> {
    storage: S,
    output_path: String,
    filename: String,
}

impl<S: Storage> JsonReportRenderer<S> {
    pub fn new(storage: S, output_path: String) -> Self {
        Self {
            storage,
            output_path,
            filename: DEFAULT_REPORT_FILENAME.to_string(),
        }
    }

    pub fn with_filename(mut self, filename: &str) -> Self {
        self.filename = filename.to_string();
        self
    }
}

impl<S: Storage> ReportRenderer for JsonReportRenderer<S> {
    fn render(&self, report: &Report) -> Result<String> {
        let json = serde_json::to_string_pretty(report)?;

        tracing::debug!(
            "Writing report ({} bytes, {} charts) to storage",
            json.len(),
            report.charts.len()
        );
        self.storage.write_file(&self.filename, json.as_bytes())?;

        Ok(format!("{}/{}", self.output_path, self.filename))
    }
}
