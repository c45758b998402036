use ninegrid::{
    logger::{self, LoggerConfig},
    Config, GridClient,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before the logger so NINEGRID_ENV can pick the preset.
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let logger_config = match env::var("NINEGRID_ENV").as_deref() {
        Ok("production") => LoggerConfig::production(),
        _ => LoggerConfig::development(),
    };
    logger::init_with_config(logger_config)?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = Config::from_env();
    logger::log_startup_info("ninegrid", env!("CARGO_PKG_VERSION"), &config);
    logger::log_config_info(&config);

    let client = GridClient::from_config(&config);
    ninegrid::server::startup(config, client).await?;

    Ok(())
}
