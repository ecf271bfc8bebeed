use anyhow::Context;
use clap::Parser;
use small_demos::utils::{logger, validation::Validate};
use small_demos::{DemoRunner, HandoffConfig, HandoffDemo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = HandoffConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.monitor);

    tracing::info!("Starting handoff demo");
    if config.verbose {
        let dump = serde_json::to_string(&config).context("serializing CLI config")?;
        tracing::debug!("CLI config: {}", dump);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let demo = HandoffDemo::from_config(&config);
    let runner = DemoRunner::new_with_monitoring(demo, config.monitor);

    let mut stdout = std::io::stdout();
    if let Err(e) = runner.run(&mut stdout).await {
        tracing::error!("❌ Handoff demo failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
