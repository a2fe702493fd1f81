//! Renderer-agnostic chart descriptions.
//!
//! A `ChartSpec` carries what was aggregated (`kind`, `columns`), how
//! (`ChartParams`) and the computed result (`ChartData`). Nothing here knows
//! about colors, templates or page layout.

use serde::{Deserialize, Serialize};

/// Stable chart identifiers, in report order.
pub mod ids {
    pub const DEPARTMENT_COUNTS: &str = "department_counts";
    pub const COMPANY_COUNTS: &str = "company_counts";
    pub const PACKAGE_HISTOGRAM: &str = "package_histogram";
    pub const PACKAGE_BY_DEPARTMENT: &str = "package_by_department";
    pub const POSITION_SHARE: &str = "position_share";
    pub const YEAR_COUNTS: &str = "year_counts";
    pub const DURATION_VS_PACKAGE: &str = "duration_vs_package";
    pub const PACKAGE_DURATION_CORRELATION: &str = "package_duration_correlation";

    pub const ALL: [&str; 8] = [
        DEPARTMENT_COUNTS,
        COMPANY_COUNTS,
        PACKAGE_HISTOGRAM,
        PACKAGE_BY_DEPARTMENT,
        POSITION_SHARE,
        YEAR_COUNTS,
        DURATION_VS_PACKAGE,
        PACKAGE_DURATION_CORRELATION,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    CategoricalCount,
    NumericHistogram,
    GroupedBoxplot,
    Proportion,
    Scatter,
    CorrelationMatrix,
}

/// Which field drives the marker size in the duration/package scatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointSize {
    #[default]
    Package,
    Duration,
    Uniform,
}

impl std::str::FromStr for PointSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "package" => Ok(PointSize::Package),
            "duration" => Ok(PointSize::Duration),
            "uniform" => Ok(PointSize::Uniform),
            other => Err(format!(
                "unknown point size field '{}', expected package, duration or uniform",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartParams {
    None,
    Histogram { bin_count: usize },
    Scatter { size_field: PointSize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    pub group: String,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProportionSlice {
    pub label: String,
    pub count: usize,
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
    pub hover: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartData {
    Counts { categories: Vec<CategoryCount> },
    Histogram { bins: Vec<HistogramBin> },
    BoxPlot { groups: Vec<BoxStats> },
    Proportion { slices: Vec<ProportionSlice> },
    Scatter { points: Vec<ScatterPoint> },
    /// `None` cells are undefined correlations (fewer than two rows or a
    /// constant column).
    Correlation {
        labels: Vec<String>,
        matrix: Vec<Vec<Option<f64>>>,
    },
}

impl ChartData {
    /// True when the view has nothing to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            ChartData::Counts { categories } => categories.is_empty(),
            ChartData::Histogram { bins } => bins.is_empty(),
            ChartData::BoxPlot { groups } => groups.is_empty(),
            ChartData::Proportion { slices } => slices.is_empty(),
            ChartData::Scatter { points } => points.is_empty(),
            ChartData::Correlation { matrix, .. } => matrix.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub columns: Vec<String>,
    pub params: ChartParams,
    pub data: ChartData,
}

impl ChartSpec {
    pub fn new(
        id: &str,
        title: &str,
        kind: ChartKind,
        columns: &[&str],
        params: ChartParams,
        data: ChartData,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            columns: columns.iter().map(|column| column.to_string()).collect(),
            params,
            data,
        }
    }
}
