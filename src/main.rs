//! Server entrypoint for the time-clock engine.

use timeclock_engine::api::{AppState, create_router};
use timeclock_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config_dir =
        std::env::var("TIMECLOCK_CONFIG_DIR").unwrap_or_else(|_| "./config/default".to_string());
    let config = ConfigLoader::load(&config_dir)?;
    info!(config_dir = %config_dir, "Loaded policy configuration");

    let state = AppState::new(config);
    let router = create_router(state);

    let addr = std::env::var("TIMECLOCK_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
