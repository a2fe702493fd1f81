// Adapters layer: concrete implementations of the domain ports (storage,
// dataset sources, report renderers).

pub mod csv_source;
pub mod json_renderer;
pub mod storage;

pub use csv_source::CsvDatasetSource;
pub use json_renderer::JsonReportRenderer;
pub use storage::LocalStorage;
