// Domain layer: models, chart descriptions and ports. No I/O here.

pub mod chart;
pub mod model;
pub mod ports;
pub mod report;
