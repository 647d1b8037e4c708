use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Storefront entry point
///
/// - config/: server, CORS, storage and realtime settings
/// - setup/: dependency injection and server setup
/// - api/: route handlers, DTOs and the realtime channel
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();
    tracing::info!(
        products = %config.storage.products_file.display(),
        carts = %config.storage.carts_file.display(),
        "Using JSON storage"
    );

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.storage, &config.realtime);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
