use clap::Parser;
use spacely::app::render_json;
use spacely::core::ConfigProvider;
use spacely::utils::error::{ErrorSeverity, SpacelyError};
use spacely::utils::{logger, validation::Validate};
use spacely::{catalog_source_for, CliConfig, Recommender, TextReport};
use std::io::BufRead;

fn exit_code(error: &SpacelyError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 1,      // bad request
        ErrorSeverity::Medium => 2,   // retryable
        ErrorSeverity::High => 3,     // data or configuration
        ErrorSeverity::Critical => 4, // system
    }
}

fn report_failure(stage: &str, error: &SpacelyError) {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        error,
        error.category(),
        error.severity()
    );
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 Suggestion: {}", error.recovery_suggestion());
}

fn respond(
    recommender: &Recommender,
    report: &TextReport,
    json: bool,
    prompt: &str,
) -> Result<(), SpacelyError> {
    let recommendation = recommender.recommend(prompt)?;
    if json {
        println!("{}", render_json(&recommendation)?);
    } else {
        print!("{}", report.render(&recommendation));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting spacely");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            report_failure("Configuration", &e);
            std::process::exit(exit_code(&e));
        }
    };

    let source = catalog_source_for(settings.catalog_source());
    tracing::info!("📁 Loading catalog from: {}", source.describe());
    let catalog = match source.load().await {
        Ok(catalog) => catalog,
        Err(e) => {
            report_failure("Catalog loading", &e);
            std::process::exit(exit_code(&e));
        }
    };

    let recommender = Recommender::new(catalog, &settings)?;
    let report = TextReport::new(
        recommender.currency().clone(),
        settings.display_fields().to_vec(),
    );

    match cli.prompt.as_deref() {
        Some(prompt) => {
            if let Err(e) = respond(&recommender, &report, cli.json, prompt) {
                report_failure("Recommendation", &e);
                std::process::exit(exit_code(&e));
            }
        }
        None => {
            // Each line is an independent request.
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(e) = respond(&recommender, &report, cli.json, &line) {
                    report_failure("Recommendation", &e);
                }
            }
        }
    }

    Ok(())
}
