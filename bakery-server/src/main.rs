use anyhow::Context;
use bakery_server::{Config, Server, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenv::dotenv();

    let config = Config::from_env().context("failed to load configuration")?;

    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;

    tracing::info!(
        "Starting bakery-server v{} (env: {})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );
    if !config.admin_guard_enabled {
        tracing::warn!("Admin guard disabled: /api/admin/* is open");
    }

    Server::new(config).run().await?;
    Ok(())
}
