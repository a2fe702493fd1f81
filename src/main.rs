use clap::Parser;
use placement_insights::adapters::json_renderer::DEFAULT_REPORT_FILENAME;
use placement_insights::core::ConfigProvider;
use placement_insights::utils::error::{ErrorSeverity, ReportError};
use placement_insights::utils::{logger, validation::Validate};
use placement_insights::{CliConfig, PlacementPipeline, ReportEngine};

fn exit_code(e: &ReportError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn main() {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting placement-insights");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }

    let seed = config.seed();
    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = PlacementPipeline::local(config, DEFAULT_REPORT_FILENAME);
    let engine = ReportEngine::new_with_monitoring(pipeline, seed, monitor_enabled);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Report built successfully!");
            println!("✅ Report built successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Report build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
        }
    }
}
