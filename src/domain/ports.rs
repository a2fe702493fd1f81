use crate::domain::chart::{ChartSpec, PointSize};
use crate::domain::model::{Dataset, EnrichedTable};
use crate::domain::report::Report;
use crate::utils::error::Result;
use rand::Rng;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Supplies the raw placement table.
pub trait DatasetSource {
    fn load(&self) -> Result<Dataset>;
}

/// Receives the finished report; returns where it ended up.
pub trait ReportRenderer {
    fn render(&self, report: &Report) -> Result<String>;
}

pub trait ConfigProvider {
    fn dataset_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn department_column(&self) -> &str;
    fn seed(&self) -> u64;
    fn histogram_bins(&self) -> usize;
    fn point_size(&self) -> PointSize;
    fn report_title(&self) -> &str;
}

/// Two-phase report build: load and enrich, then derive charts. Rendering
/// only happens once both phases succeeded.
pub trait Pipeline {
    fn extract(&self) -> Result<Dataset>;
    fn enrich<R: Rng + ?Sized>(&self, data: Dataset, rng: &mut R) -> Result<EnrichedTable>;
    fn build_charts(&self, table: &EnrichedTable) -> Result<Vec<ChartSpec>>;
    fn load(&self, report: Report) -> Result<String>;
    fn report_title(&self) -> &str;
}
