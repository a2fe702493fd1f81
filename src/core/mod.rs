pub mod charts;
pub mod engine;
pub mod generator;
pub mod pipeline;
pub mod stats;

pub use crate::domain::model::{Dataset, EnrichedTable, Record};
pub use crate::domain::ports::{ConfigProvider, DatasetSource, Pipeline, ReportRenderer, Storage};
pub use crate::utils::error::Result;
