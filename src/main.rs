use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use urlscope_backend_core::{api_router, app_config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "urlscope_backend_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = app_config::config();
    let bind_address = config.server_address();
    info!("Starting Urlscope Backend API on {}", bind_address);
    info!(
        "DNS endpoint: {}, geo endpoint: {}, blacklist entries: {}",
        config.dns.endpoint,
        config.geo.endpoint,
        config.security.domain_blacklist.len()
    );

    let state = AppState::from_config(config.clone());
    let router = api_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
