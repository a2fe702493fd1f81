use crate::domain::chart::{ids, ChartSpec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Internship & Placement Insights Dashboard";
pub const DASHBOARD_HEADING: &str = "Internship & Placement Trends Dashboard";
pub const DASHBOARD_FOOTER: &str = "© 2025 Internship & Placement Analytics";

/// Static page arrangement: rows of chart ids, rendered left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub heading: String,
    pub rows: Vec<Vec<String>>,
    pub footer: String,
}

impl PageLayout {
    /// Four rows of two charts each under the fixed page heading.
    pub fn dashboard() -> Self {
        let rows = ids::ALL
            .chunks(2)
            .map(|pair| pair.iter().map(|id| id.to_string()).collect())
            .collect();

        Self {
            heading: DASHBOARD_HEADING.to_string(),
            rows,
            footer: DASHBOARD_FOOTER.to_string(),
        }
    }

    pub fn chart_ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

/// Everything the renderer receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub seed: u64,
    pub row_count: usize,
    pub layout: PageLayout,
    pub charts: Vec<ChartSpec>,
}

impl Report {
    pub fn new(title: &str, seed: u64, row_count: usize, charts: Vec<ChartSpec>) -> Self {
        Self {
            title: title.to_string(),
            generated_at: Utc::now(),
            seed,
            row_count,
            layout: PageLayout::dashboard(),
            charts,
        }
    }

    pub fn chart(&self, id: &str) -> Option<&ChartSpec> {
        self.charts.iter().find(|chart| chart.id == id)
    }
}
