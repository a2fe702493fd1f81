//! Derives the eight dashboard views from an enriched placement table.
//!
//! Every view is computed straight from the records; none reads another
//! view's output. Categorical axes keep first-appearance order, years are
//! sorted ascending.

use crate::core::stats;
use crate::domain::chart::{
    ids, ChartData, ChartKind, ChartParams, ChartSpec, PointSize, ProportionSlice, ScatterPoint,
};
use crate::domain::model::{
    EnrichedTable, Record, COMPANY_COLUMN, DURATION_COLUMN, PACKAGE_COLUMN, POSITION_COLUMN,
    YEAR_COLUMN,
};
use crate::utils::error::Result;

pub const DEFAULT_HISTOGRAM_BINS: usize = 15;

#[derive(Debug, Clone)]
pub struct ChartBuilder {
    department_column: String,
    histogram_bins: usize,
    point_size: PointSize,
}

impl ChartBuilder {
    pub fn new(department_column: &str) -> Self {
        Self {
            department_column: department_column.to_string(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            point_size: PointSize::default(),
        }
    }

    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins;
        self
    }

    pub fn with_point_size(mut self, point_size: PointSize) -> Self {
        self.point_size = point_size;
        self
    }

    /// All eight views in report order. Fails with `SchemaMissing` if the
    /// department column is absent.
    pub fn build(&self, table: &EnrichedTable) -> Result<Vec<ChartSpec>> {
        let records = table.records(&self.department_column)?;
        tracing::debug!(rows = records.len(), "building chart specs");

        Ok(vec![
            self.department_counts(&records),
            self.company_counts(&records),
            self.package_histogram(&records),
            self.package_by_department(&records),
            self.position_share(&records),
            self.year_counts(&records),
            self.duration_vs_package(&records),
            self.package_duration_correlation(&records),
        ])
    }

    pub fn department_counts(&self, records: &[Record<'_>]) -> ChartSpec {
        let counts = stats::count_in_order(records.iter().map(|r| r.department));
        ChartSpec::new(
            ids::DEPARTMENT_COUNTS,
            "Department-wise Placement Count",
            ChartKind::CategoricalCount,
            &[self.department_column.as_str()],
            ChartParams::None,
            ChartData::Counts {
                categories: stats::to_category_counts(counts),
            },
        )
    }

    pub fn company_counts(&self, records: &[Record<'_>]) -> ChartSpec {
        let counts = stats::count_in_order(records.iter().map(|r| r.company()));
        ChartSpec::new(
            ids::COMPANY_COUNTS,
            "Company-wise Placement Count",
            ChartKind::CategoricalCount,
            &[COMPANY_COLUMN],
            ChartParams::None,
            ChartData::Counts {
                categories: stats::to_category_counts(counts),
            },
        )
    }

    pub fn package_histogram(&self, records: &[Record<'_>]) -> ChartSpec {
        let packages: Vec<f64> = records.iter().map(|r| r.package()).collect();
        ChartSpec::new(
            ids::PACKAGE_HISTOGRAM,
            "Package Distribution (LPA)",
            ChartKind::NumericHistogram,
            &[PACKAGE_COLUMN],
            ChartParams::Histogram {
                bin_count: self.histogram_bins,
            },
            ChartData::Histogram {
                bins: stats::histogram(&packages, self.histogram_bins),
            },
        )
    }

    pub fn package_by_department(&self, records: &[Record<'_>]) -> ChartSpec {
        let order = stats::count_in_order(records.iter().map(|r| r.department));
        let groups = order
            .into_iter()
            .filter_map(|(department, _)| {
                let packages: Vec<f64> = records
                    .iter()
                    .filter(|r| r.department == department)
                    .map(|r| r.package())
                    .collect();
                stats::box_stats(department, &packages)
            })
            .collect();

        ChartSpec::new(
            ids::PACKAGE_BY_DEPARTMENT,
            "Package Distribution by Department",
            ChartKind::GroupedBoxplot,
            &[self.department_column.as_str(), PACKAGE_COLUMN],
            ChartParams::None,
            ChartData::BoxPlot { groups },
        )
    }

    pub fn position_share(&self, records: &[Record<'_>]) -> ChartSpec {
        let total = records.len() as f64;
        let slices = stats::count_in_order(records.iter().map(|r| r.position()))
            .into_iter()
            .map(|(position, count)| ProportionSlice {
                label: position.to_string(),
                count,
                fraction: count as f64 / total,
            })
            .collect();

        ChartSpec::new(
            ids::POSITION_SHARE,
            "Position-wise Distribution",
            ChartKind::Proportion,
            &[POSITION_COLUMN],
            ChartParams::None,
            ChartData::Proportion { slices },
        )
    }

    pub fn year_counts(&self, records: &[Record<'_>]) -> ChartSpec {
        let mut counts = stats::count_in_order(records.iter().map(|r| r.year()));
        counts.sort_by_key(|(year, _)| *year);

        ChartSpec::new(
            ids::YEAR_COUNTS,
            "Placements Over the Years",
            ChartKind::CategoricalCount,
            &[YEAR_COLUMN],
            ChartParams::None,
            ChartData::Counts {
                categories: stats::to_category_counts(counts),
            },
        )
    }

    pub fn duration_vs_package(&self, records: &[Record<'_>]) -> ChartSpec {
        let points = records
            .iter()
            .map(|r| ScatterPoint {
                x: f64::from(r.duration()),
                y: r.package(),
                size: match self.point_size {
                    PointSize::Package => r.package(),
                    PointSize::Duration => f64::from(r.duration()),
                    PointSize::Uniform => 1.0,
                },
                color: r.department.to_string(),
                hover: r.company().to_string(),
            })
            .collect();

        ChartSpec::new(
            ids::DURATION_VS_PACKAGE,
            "Internship Duration vs Package (LPA)",
            ChartKind::Scatter,
            &[
                DURATION_COLUMN,
                PACKAGE_COLUMN,
                self.department_column.as_str(),
                COMPANY_COLUMN,
            ],
            ChartParams::Scatter {
                size_field: self.point_size,
            },
            ChartData::Scatter { points },
        )
    }

    pub fn package_duration_correlation(&self, records: &[Record<'_>]) -> ChartSpec {
        let labels = vec![PACKAGE_COLUMN.to_string(), DURATION_COLUMN.to_string()];
        let matrix = if records.is_empty() {
            Vec::new()
        } else {
            let packages: Vec<f64> = records.iter().map(|r| r.package()).collect();
            let durations: Vec<f64> = records.iter().map(|r| f64::from(r.duration())).collect();
            let r = stats::pearson(&packages, &durations);
            vec![vec![Some(1.0), r], vec![r, Some(1.0)]]
        };

        ChartSpec::new(
            ids::PACKAGE_DURATION_CORRELATION,
            "Correlation Heatmap",
            ChartKind::CorrelationMatrix,
            &[PACKAGE_COLUMN, DURATION_COLUMN],
            ChartParams::None,
            ChartData::Correlation { labels, matrix },
        )
    }
}
