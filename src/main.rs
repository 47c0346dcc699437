use anyhow::Context;
use catalog_report::core::engine::progress_line;
use catalog_report::domain::ports::JobProvider;
use catalog_report::utils::logger;
use catalog_report::{
    CliConfig, ConversionJob, ConversionPipeline, ConversionSummary, LocalStorage, ReportEngine,
    ReportError, TomlConfig,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::info!("Starting catalog-report");
    tracing::debug!("CLI config: {:?}", config);

    let (provider, jobs) = match load_jobs(&config) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(provider.base_dir());
    let engine = ReportEngine::new(ConversionPipeline::new(storage));

    // stdout carries only the JSON document under --json
    let show_progress = !config.json;
    if show_progress {
        println!("Starting CSV to TXT conversion...");
        println!("{}", "=".repeat(40));
    }
    let summary = engine.run_with_progress(&jobs, |position, job| {
        if show_progress {
            println!();
            println!("{}", progress_line(position, job));
        }
    });

    if config.json {
        let json = serde_json::to_string_pretty(&summary).context("serializing summary")?;
        println!("{}", json);
    } else {
        print_summary(&summary);
    }

    let exit_code = summary.exit_code();
    if exit_code > 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn load_jobs(
    config: &CliConfig,
) -> Result<(Box<dyn JobProvider>, Vec<ConversionJob>), ReportError> {
    let provider: Box<dyn JobProvider> = match &config.config {
        Some(path) => {
            tracing::info!("Loading jobs from {}", path.display());
            Box::new(TomlConfig::from_file(path)?)
        }
        None => Box::new(config.clone()),
    };
    let jobs = provider.jobs()?;
    Ok((provider, jobs))
}

fn print_summary(summary: &ConversionSummary) {
    for outcome in &summary.outcomes {
        if let Some(e) = &outcome.error {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }
    }

    println!();
    println!("{}", "=".repeat(40));
    println!("Conversion completed!");
    for path in &summary.created_outputs {
        println!("✓ Created: {}", path.display());
    }
}
