use anyhow::Context;
use clap::Parser;
use portfolio_site::core::dataset::dataset_json;
use portfolio_site::core::ConfigProvider;
use portfolio_site::utils::logger::{self, LogFormat};
use portfolio_site::utils::validation::Validate;
use portfolio_site::{CliConfig, LocalStorage, SiteEngine, StaticSitePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // stdout must hold nothing but the JSON document
    if config.dump_data {
        let json = dataset_json().context("failed to encode the portfolio dataset")?;
        println!("{}", json);
        return Ok(());
    }

    let format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, config.verbose);

    tracing::info!("Starting portfolio-site");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = StaticSitePipeline::new(storage, config);
    let engine = SiteEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("Site build completed");
            println!("✅ Site written to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "Site build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
