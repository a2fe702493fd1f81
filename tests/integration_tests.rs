use placement_insights::adapters::json_renderer::DEFAULT_REPORT_FILENAME;
use placement_insights::domain::chart::ids;
use placement_insights::{
    ChartData, CliConfig, PlacementPipeline, PointSize, Report, ReportEngine, ReportError,
};
use tempfile::TempDir;

const REPORT: &str = DEFAULT_REPORT_FILENAME;

const DATASET: &str = "\
Student_ID,Name,Department,CGPA
1,Asha,CSE,8.4
2,Ravi,ECE,7.9
3,Meera,CSE,9.1
4,Kiran,MECH,6.8
5,Farah,IT,8.0
6,Sunil,ECE,7.2
7,Divya,CSE,8.8
8,Arjun,CIVIL,7.5
";

fn config(input: String, output_path: String) -> CliConfig {
    CliConfig {
        input,
        output_path,
        seed: 42,
        department_column: "Department".to_string(),
        histogram_bins: 15,
        point_size: PointSize::Package,
        title: "Integration Dashboard".to_string(),
        verbose: false,
        json_logs: false,
        monitor: false,
    }
}

fn write_dataset(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn report_path(output_path: &str) -> std::path::PathBuf {
    std::path::Path::new(output_path).join(DEFAULT_REPORT_FILENAME)
}

fn read_report(output_path: &str) -> Report {
    let bytes = std::fs::read(report_path(output_path)).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn counts_total(data: &ChartData) -> usize {
    match data {
        ChartData::Counts { categories } => categories.iter().map(|c| c.count).sum(),
        ChartData::Histogram { bins } => bins.iter().map(|b| b.count).sum(),
        other => panic!("not a count view: {:?}", other),
    }
}

#[test]
fn test_end_to_end_report() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_dataset(&temp_dir, "placements.csv", DATASET);
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();

    let cfg = config(input, output_path.clone());
    let engine = ReportEngine::new(PlacementPipeline::local(cfg, REPORT), 42);
    let written = engine.run().unwrap();
    assert_eq!(written, format!("{}/report.json", output_path));

    let report = read_report(&output_path);
    assert_eq!(report.title, "Integration Dashboard");
    assert_eq!(report.row_count, 8);
    assert_eq!(report.seed, 42);
    assert_eq!(report.charts.len(), 8);
    let chart_ids: Vec<&str> = report.charts.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(chart_ids, ids::ALL.to_vec());

    let departments = report.chart(ids::DEPARTMENT_COUNTS).unwrap();
    assert_eq!(counts_total(&departments.data), 8);
    let ChartData::Counts { categories } = &departments.data else {
        panic!("expected counts");
    };
    let labels: Vec<&str> = categories.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["CSE", "ECE", "MECH", "IT", "CIVIL"]);

    assert_eq!(counts_total(&report.chart(ids::YEAR_COUNTS).unwrap().data), 8);
    assert_eq!(counts_total(&report.chart(ids::PACKAGE_HISTOGRAM).unwrap().data), 8);

    let ChartData::Proportion { slices } = &report.chart(ids::POSITION_SHARE).unwrap().data else {
        panic!("expected proportion");
    };
    let total: f64 = slices.iter().map(|s| s.fraction).sum();
    assert!((total - 1.0).abs() < 1e-9);

    let ChartData::Scatter { points } = &report.chart(ids::DURATION_VS_PACKAGE).unwrap().data else {
        panic!("expected scatter");
    };
    assert_eq!(points.len(), 8);
    assert!(points.iter().all(|p| (3.0..=50.0).contains(&p.y) && p.size == p.y));
    assert!(points.iter().all(|p| (1.0..=6.0).contains(&p.x)));

    let ChartData::Correlation { matrix, .. } =
        &report.chart(ids::PACKAGE_DURATION_CORRELATION).unwrap().data
    else {
        panic!("expected correlation");
    };
    assert_eq!(matrix[0][1], matrix[1][0]);
    assert_eq!(matrix[0][0], Some(1.0));
    assert_eq!(matrix[1][1], Some(1.0));
}

#[test]
fn test_same_seed_same_charts() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_dataset(&temp_dir, "placements.csv", DATASET);

    let build = |seed: u64| {
        let cfg = config(input.clone(), "unused".to_string());
        ReportEngine::new(PlacementPipeline::local(cfg, REPORT), seed)
            .build()
            .unwrap()
            .charts
    };

    assert_eq!(build(42), build(42));
    assert_ne!(build(42), build(43));
}

#[test]
fn test_tsv_dataset() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_dataset(
        &temp_dir,
        "placements.tsv",
        "Name\tDepartment\nAsha\tCSE\nRavi\tECE\n",
    );

    let cfg = config(input, "unused".to_string());
    let report = ReportEngine::new(PlacementPipeline::local(cfg, REPORT), 42)
        .build()
        .unwrap();
    assert_eq!(report.row_count, 2);
}

#[test]
fn test_header_only_dataset_gives_empty_views() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_dataset(&temp_dir, "empty.csv", "Student_ID,Department\n");
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();

    let cfg = config(input, output_path.clone());
    ReportEngine::new(PlacementPipeline::local(cfg, REPORT), 42)
        .run()
        .unwrap();

    let report = read_report(&output_path);
    assert_eq!(report.row_count, 0);
    assert_eq!(report.charts.len(), 8);
    assert!(report.charts.iter().all(|c| c.data.is_empty()));
}

#[test]
fn test_missing_dataset_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("absent.csv").to_str().unwrap().to_string();
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();

    let cfg = config(input, output_path.clone());
    let result = ReportEngine::new(PlacementPipeline::local(cfg, REPORT), 42).run();

    assert!(matches!(result, Err(ReportError::SourceMissing { .. })));
    assert!(!report_path(&output_path).exists());
}

#[test]
fn test_missing_department_column_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_dataset(&temp_dir, "placements.csv", "Name,Branch\nAsha,CSE\n");
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();

    let cfg = config(input, output_path.clone());
    let result = ReportEngine::new(PlacementPipeline::local(cfg, REPORT), 42).run();

    assert!(matches!(
        result,
        Err(ReportError::SchemaMissing { column, .. }) if column == "Department"
    ));
    assert!(!report_path(&output_path).exists());
}
