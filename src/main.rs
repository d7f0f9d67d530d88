use anyhow::Result;
use tracing::info;

use dalil_events::config::Config;
use dalil_events::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (optional)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dalil_events=info".parse()?),
        )
        .init();

    info!("Starting Dalil events site");

    let config = Config::from_env()?;
    info!(
        translations = %config.translations_file.display(),
        preferences = %config.preferences_file.display(),
        "Loaded configuration"
    );

    server::serve(config).await
}
