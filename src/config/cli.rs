use crate::core::charts::DEFAULT_HISTOGRAM_BINS;
use crate::core::ConfigProvider;
use crate::domain::chart::PointSize;
use crate::domain::report::DEFAULT_TITLE;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATASET: &str = "internship_placement_analysis_dataset.csv";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "placement-insights")]
#[command(about = "Builds the internship & placement insights report")]
pub struct CliConfig {
    /// Placement dataset (.csv or .tsv with a header row)
    #[arg(long, default_value = DEFAULT_DATASET)]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Seed for the synthetic attributes
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[arg(long, default_value = "Department")]
    pub department_column: String,

    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
    pub histogram_bins: usize,

    /// Marker size field for the duration/package scatter: package, duration or uniform
    #[arg(long, default_value = "package")]
    pub point_size: PointSize,

    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn dataset_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn department_column(&self) -> &str {
        &self.department_column
    }

    fn seed(&self) -> u64 {
        self.seed
    }

    fn histogram_bins(&self) -> usize {
        self.histogram_bins
    }

    fn point_size(&self) -> PointSize {
        self.point_size
    }

    fn report_title(&self) -> &str {
        &self.title
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_file_extension("input", &self.input, &["csv", "tsv"])?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("department_column", &self.department_column)?;
        validation::validate_range("histogram_bins", self.histogram_bins, 1, 200)?;
        validation::validate_non_empty_string("title", &self.title)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["placement-insights"]);
        assert_eq!(config.dataset_path(), DEFAULT_DATASET);
        assert_eq!(config.seed(), 42);
        assert_eq!(config.histogram_bins(), 15);
        assert_eq!(config.point_size(), PointSize::Package);
        assert_eq!(config.department_column(), "Department");
        assert_eq!(config.report_title(), DEFAULT_TITLE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::parse_from([
            "placement-insights",
            "--input",
            "data/placements.tsv",
            "--seed",
            "7",
            "--point-size",
            "uniform",
            "--histogram-bins",
            "20",
        ]);
        assert_eq!(config.seed(), 7);
        assert_eq!(config.point_size(), PointSize::Uniform);
        assert_eq!(config.histogram_bins(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_spreadsheet_input() {
        let config = CliConfig::parse_from(["placement-insights", "--input", "data.xlsx"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_bins() {
        let config = CliConfig::parse_from(["placement-insights", "--histogram-bins", "0"]);
        assert!(config.validate().is_err());
    }
}
