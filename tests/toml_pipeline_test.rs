use placement_insights::core::ConfigProvider;
use placement_insights::domain::chart::ids;
use placement_insights::utils::validation::Validate;
use placement_insights::{
    ChartData, ChartParams, PlacementPipeline, PointSize, ReportEngine, TomlConfig,
};
use tempfile::TempDir;

#[test]
fn test_toml_configured_report() {
    let temp_dir = TempDir::new().unwrap();
    let dataset = temp_dir.path().join("placements.csv");
    std::fs::write(
        &dataset,
        "Name,Branch\nAsha,CSE\nRavi,ECE\nMeera,CSE\nKiran,IT\n",
    )
    .unwrap();
    let output = temp_dir.path().join("out");

    let toml_content = format!(
        r#"
[report]
title = "Branch Report"
output_path = '{}'
filename = "branch.json"

[dataset]
path = '{}'
department_column = "Branch"

[generator]
seed = 42

[charts]
histogram_bins = 10
point_size = "uniform"
"#,
        output.display(),
        dataset.display()
    );

    let config = TomlConfig::from_toml_str(&toml_content).unwrap();
    config.validate().unwrap();
    let seed = config.seed();
    let filename = config.report_filename().to_string();

    let engine = ReportEngine::new(PlacementPipeline::local(config, &filename), seed);
    let written = engine.run().unwrap();
    assert!(written.ends_with("branch.json"));

    let bytes = std::fs::read(output.join("branch.json")).unwrap();
    let report: placement_insights::Report = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(report.title, "Branch Report");
    assert_eq!(report.layout.heading, "Internship & Placement Trends Dashboard");

    let histogram = report.chart(ids::PACKAGE_HISTOGRAM).unwrap();
    assert_eq!(histogram.params, ChartParams::Histogram { bin_count: 10 });
    let ChartData::Histogram { bins } = &histogram.data else {
        panic!("expected histogram");
    };
    assert_eq!(bins.len(), 10);

    let scatter = report.chart(ids::DURATION_VS_PACKAGE).unwrap();
    assert_eq!(
        scatter.params,
        ChartParams::Scatter {
            size_field: PointSize::Uniform
        }
    );
    assert_eq!(scatter.columns[2], "Branch");
}
