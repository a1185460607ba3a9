use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::Config;
use activities::services::ActivitiesService;
use activities::web;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    let service = ActivitiesService::seeded();
    let app = web::app(service, &config.static_dir);

    // Fall back to the next port if the configured one is taken.
    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            let Some(fallback) = config.fallback_bind_addr() else {
                return Err(e);
            };
            warn!(
                "Could not bind {}: {}. Trying fallback {}",
                config.bind_addr(),
                e,
                fallback
            );
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Serving activities on http://{}", bound_addr);

    axum::serve(listener, app).await
}
