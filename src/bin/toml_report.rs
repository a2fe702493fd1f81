use anyhow::Context;
use clap::Parser;
use placement_insights::core::ConfigProvider;
use placement_insights::domain::chart::ids;
use placement_insights::utils::{logger, validation::Validate};
use placement_insights::{PlacementPipeline, ReportEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Builds the placement report from a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "placement-report.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Override the generator seed from config
    #[arg(long)]
    seed: Option<u64>,

    /// Show what would be built without reading the dataset
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    logger::init_logger(args.verbose, config.json_logs());
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(seed) = args.seed {
        config.generator.seed = Some(seed);
        tracing::info!("🔧 Seed overridden to: {}", seed);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        return Err(e).context("invalid configuration");
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be read or written");
        perform_dry_run(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let seed = config.seed();
    let filename = config.report_filename().to_string();

    let pipeline = PlacementPipeline::local(config, &filename);
    let engine = ReportEngine::new_with_monitoring(pipeline, seed, monitor_enabled);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Report built successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Report build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            let suggestion = e.recovery_suggestion();
            Err(e).context(suggestion)
        }
    }
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Report: {}", config.report_title());
    tracing::info!("   Dataset: {}", config.dataset_path());
    tracing::info!("   Department column: {}", config.department_column());
    tracing::info!("   Seed: {}", config.seed());
    tracing::info!(
        "   Histogram bins: {}, point size: {:?}",
        config.histogram_bins(),
        config.point_size()
    );
    tracing::info!(
        "   Output: {}/{}",
        config.output_path(),
        config.report_filename()
    );
}

fn perform_dry_run(config: &TomlConfig) {
    println!("Would read:  {}", config.dataset_path());
    println!(
        "Would write: {}/{}",
        config.output_path(),
        config.report_filename()
    );
    println!("Charts:");
    for (i, id) in ids::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, id);
    }
}
