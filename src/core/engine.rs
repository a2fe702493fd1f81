use crate::core::Pipeline;
use crate::domain::report::Report;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Drives a `Pipeline` through load/enrich, chart derivation and rendering.
pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
    seed: u64,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P, seed: u64) -> Self {
        Self::new_with_monitoring(pipeline, seed, false)
    }

    pub fn new_with_monitoring(pipeline: P, seed: u64, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            seed,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Builds the report without rendering it. The random source is created
    /// here, once, and only the generator draws from it.
    pub fn build(&self) -> Result<Report> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        // Phase 1: load + enrich
        tracing::info!("📥 Loading dataset...");
        let dataset = self.pipeline.extract()?;
        self.monitor.log_phase("load");

        tracing::info!(rows = dataset.len(), seed = self.seed, "🧪 Enriching records...");
        let table = self.pipeline.enrich(dataset, &mut rng)?;
        self.monitor.log_phase("enrich");

        // Phase 2: chart specs
        tracing::info!("📈 Building chart specs...");
        let charts = self.pipeline.build_charts(&table)?;
        self.monitor.log_phase("charts");
        tracing::info!(charts = charts.len(), "Built chart specs");

        Ok(Report::new(
            self.pipeline.report_title(),
            self.seed,
            table.len(),
            charts,
        ))
    }

    pub fn run(&self) -> Result<String> {
        let report = self.build()?;

        tracing::info!("🖼️ Rendering report...");
        let output_path = self.pipeline.load(report)?;
        self.monitor.log_phase("render");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
