use anyhow::Result;
use ordering_helper_bot::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ordering_helper_bot=info".parse()?),
        )
        .init();

    info!("Starting ordering helper LINE bot");

    // Load configuration from environment
    let config = config::Config::from_env()?;
    if let Some(liff_id) = &config.liff_id {
        info!("Welcome card opens LIFF app {}", liff_id);
    }

    server::serve(&config).await
}
