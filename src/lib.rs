pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{CsvDatasetSource, JsonReportRenderer, LocalStorage};
pub use self::core::{engine::ReportEngine, pipeline::PlacementPipeline};
pub use domain::chart::{ChartData, ChartKind, ChartParams, ChartSpec, PointSize};
pub use domain::report::Report;
pub use utils::error::{ReportError, Result};
