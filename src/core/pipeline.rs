use crate::adapters::{CsvDatasetSource, JsonReportRenderer, LocalStorage};
use crate::core::charts::ChartBuilder;
use crate::core::generator::SyntheticGenerator;
use crate::core::{ConfigProvider, DatasetSource, Pipeline, ReportRenderer};
use crate::domain::chart::ChartSpec;
use crate::domain::model::{Dataset, EnrichedTable};
use crate::domain::report::Report;
use crate::utils::error::Result;
use rand::Rng;

pub struct PlacementPipeline<D: DatasetSource, R: ReportRenderer, C: ConfigProvider> {
    source: D,
    renderer: R,
    config: C,
    generator: SyntheticGenerator,
    charts: ChartBuilder,
}

impl<D: DatasetSource, R: ReportRenderer, C: ConfigProvider> PlacementPipeline<D, R, C> {
    pub fn new(source: D, renderer: R, config: C) -> Self {
        let charts = ChartBuilder::new(config.department_column())
            .with_histogram_bins(config.histogram_bins())
            .with_point_size(config.point_size());

        Self {
            source,
            renderer,
            config,
            generator: SyntheticGenerator::new(),
            charts,
        }
    }
}

impl<C: ConfigProvider>
    PlacementPipeline<CsvDatasetSource<LocalStorage>, JsonReportRenderer<LocalStorage>, C>
{
    /// Dataset from the local filesystem, JSON report into `output_path`.
    pub fn local(config: C, report_filename: &str) -> Self {
        let source = CsvDatasetSource::new(
            LocalStorage::new(".".to_string()),
            config.dataset_path().to_string(),
        );
        let renderer = JsonReportRenderer::new(
            LocalStorage::new(config.output_path().to_string()),
            config.output_path().to_string(),
        )
        .with_filename(report_filename);

        Self::new(source, renderer, config)
    }
}

impl<D: DatasetSource, R: ReportRenderer, C: ConfigProvider> Pipeline
    for PlacementPipeline<D, R, C>
{
    fn extract(&self) -> Result<Dataset> {
        tracing::debug!("Loading dataset from: {}", self.config.dataset_path());
        let dataset = self.source.load()?;
        dataset.require_column(self.config.department_column())?;
        Ok(dataset)
    }

    fn enrich<G: Rng + ?Sized>(&self, data: Dataset, rng: &mut G) -> Result<EnrichedTable> {
        if data.is_empty() {
            tracing::warn!("Dataset has no rows, every chart will be empty");
        }

        let synthetic = self.generator.generate(data.len(), rng);
        EnrichedTable::new(data, synthetic)
    }

    fn build_charts(&self, table: &EnrichedTable) -> Result<Vec<ChartSpec>> {
        self.charts.build(table)
    }

    fn load(&self, report: Report) -> Result<String> {
        self.renderer.render(&report)
    }

    fn report_title(&self) -> &str {
        self.config.report_title()
    }
}
