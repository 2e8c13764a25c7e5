use clap::Parser;
use memopass::utils::{logger, validation::Validate};
use memopass::{App, AppConfig, CliArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_logger(args.verbose, args.json_logs);

    tracing::info!("Starting memopass");
    if let Some(path) = &args.config {
        tracing::info!("📁 Loading configuration from: {}", path.display());
    }

    let config = match AppConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
    if args.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    let app = App::build(config)?;

    if let Err(e) = app.prepare().await {
        tracing::error!("❌ Word source failed to load: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    app.run().await?;
    Ok(())
}
