use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use transcoding_api::app;
use transcoding_api::config::settings::AppConfig;
use transcoding_api::infrastructure::redis::client::RedisService;
use transcoding_api::modules::jobs::repository::{JobRepository, MemoryJobRepository, RedisJobRepository};
use transcoding_api::provider::ProviderRegistry;
use transcoding_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting server...");

    let config = AppConfig::new();

    let jobs: Arc<dyn JobRepository> = match &config.redis_url {
        Some(url) => {
            let redis = RedisService::new(url).await.context("Failed to connect to Redis")?;
            Arc::new(RedisJobRepository::new(redis))
        }
        None => {
            warn!("REDIS_URL not set, job records will be kept in memory");
            Arc::new(MemoryJobRepository::new())
        }
    };

    let providers = ProviderRegistry::with_builtin();
    info!("Registered providers: {}", providers.names().join(", "));

    let addr = format!("0.0.0.0:{}", config.server_port);
    let state = AppState::new(config, providers, jobs);
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
