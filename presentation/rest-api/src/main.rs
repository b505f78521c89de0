mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, logging_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// Layout:
/// - config/: Application configuration (server, CORS, clock)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, then initialize tracing with the RUST_LOG filter
    let env_filter = logging_config::load_env_filter(None, logging_config::LOG_FILTER_VAR);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load configuration
    let config = AppConfig::from_env()?;

    // 3. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 4. Run server
    Server::run(config, container).await?;

    Ok(())
}
