use clap::Parser;
use portfolio_site::core::navigation::NavigationState;
use portfolio_site::core::ConfigProvider;
use portfolio_site::utils::logger::{self, LogFormat};
use portfolio_site::utils::validation::Validate;
use portfolio_site::{LocalStorage, SiteEngine, StaticSitePipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-site")]
#[command(about = "Render portfolio snapshots from a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the output directory from config
    #[arg(long)]
    output: Option<String>,

    /// Show what would be rendered without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_logger(LogFormat::Compact, args.verbose);

    tracing::info!("Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(output) = args.output {
        tracing::info!("Output directory overridden to: {}", output);
        config.override_output(output);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("Configuration loaded and validated");
    display_config_summary(&config);

    if args.dry_run {
        perform_dry_run(&config);
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = StaticSitePipeline::new(storage, config);
    let engine = SiteEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Site written to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "Site build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Configuration Summary:");
    println!("  Site: {}", config.site_name());
    if let Some(description) = config.site.as_ref().and_then(|s| s.description.as_deref()) {
        println!("  Description: {}", description);
    }
    println!("  Output: {}", config.output_path());
    let sections: Vec<String> = config.sections().iter().map(|s| s.to_string()).collect();
    println!("  Sections: {}", sections.join(", "));
    println!("  Menu open: {}", config.menu_open());
    println!("  Scroll offset: {}", config.scroll_offset());
    println!("  Manifest: {}", config.write_manifest());
    println!("  Scripted events: {}", config.events().len());
    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry run, nothing will be written:");
    for section in config.sections() {
        println!("  {} -> {}", section, section.file_name());
    }

    if !config.events().is_empty() {
        let state = NavigationState::replay(config.events());
        println!(
            "  snapshot.html -> {} (menu_open={}, navbar={:?})",
            state.active_section(),
            state.menu_open(),
            state.navbar_style()
        );
    }

    if config.write_manifest() {
        println!("  manifest.json");
    }
}
