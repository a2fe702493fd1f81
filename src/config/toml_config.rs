use crate::adapters::json_renderer::DEFAULT_REPORT_FILENAME;
use crate::core::charts::DEFAULT_HISTOGRAM_BINS;
use crate::core::ConfigProvider;
use crate::domain::chart::PointSize;
use crate::domain::report::DEFAULT_TITLE;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportConfig,
    pub dataset: DatasetConfig,
    pub generator: GeneratorConfig,
    pub charts: Option<ChartsConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub title: Option<String>,
    pub output_path: String,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub path: String,
    pub department_column: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartsConfig {
    pub histogram_bins: Option<usize>,
    pub point_size: Option<PointSize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReportError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ReportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_path("dataset.path", &self.dataset.path)?;
        validation::validate_file_extension("dataset.path", &self.dataset.path, &["csv", "tsv"])?;
        validation::validate_non_empty_string(
            "dataset.department_column",
            self.department_column(),
        )?;
        validation::validate_required_field("generator.seed", &self.generator.seed)?;
        validation::validate_path("report.output_path", &self.report.output_path)?;
        validation::validate_path("report.filename", self.report_filename())?;
        validation::validate_non_empty_string("report.title", self.report_title())?;
        validation::validate_range("charts.histogram_bins", self.histogram_bins(), 1, 200)?;

        if let Some(format) = self.log_format() {
            if !["compact", "json"].contains(&format) {
                return Err(ReportError::InvalidConfigValueError {
                    field: "monitoring.log_format".to_string(),
                    value: format.to_string(),
                    reason: "Valid formats: compact, json".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn report_filename(&self) -> &str {
        self.report
            .filename
            .as_deref()
            .unwrap_or(DEFAULT_REPORT_FILENAME)
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_format(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_format.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.log_format() == Some("json")
    }
}

impl ConfigProvider for TomlConfig {
    fn dataset_path(&self) -> &str {
        &self.dataset.path
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn department_column(&self) -> &str {
        self.dataset
            .department_column
            .as_deref()
            .unwrap_or("Department")
    }

    fn seed(&self) -> u64 {
        self.generator.seed.unwrap_or(42)
    }

    fn histogram_bins(&self) -> usize {
        self.charts
            .as_ref()
            .and_then(|c| c.histogram_bins)
            .unwrap_or(DEFAULT_HISTOGRAM_BINS)
    }

    fn point_size(&self) -> PointSize {
        self.charts
            .as_ref()
            .and_then(|c| c.point_size)
            .unwrap_or_default()
    }

    fn report_title(&self) -> &str {
        self.report.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
