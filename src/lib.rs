// Library exports for Urlscope Backend
// This file exposes modules and functions for library consumers

pub mod app;
pub mod app_config;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use app::AppState;
pub use app_config::{AppConfig, CONFIG};
pub use middleware::dynamic_cors_middleware;
pub use services::{
    DnsError, DohResolver, GeoError, GeoLocation, GeoLookup, IpWhoisClient, Resolver, ScanReport,
    ScanService,
};
pub use utils::{
    label_for, rule_label, score_url, score_url_with_blacklist, Classification, RiskResult, RuleId,
    RuleOutcome, ScanError, DEFAULT_DOMAIN_BLACKLIST,
};

// Re-export handler route builders
pub use handlers::{docs_routes, scan_routes};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Build the full API router around an existing state. Used by the binary
/// and by router-level tests with mocked lookups.
pub fn api_router(state: AppState) -> Router {
    let mut v1 = Router::new()
        .route("/health", get(health_check))
        .merge(scan_routes());

    if state.config.features.enable_swagger_ui {
        v1 = v1.merge(docs_routes());
    }

    Router::new()
        .nest("/api/v1", v1)
        .layer(axum::middleware::from_fn(dynamic_cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Health check handler
pub async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    use axum::http::StatusCode;
    use axum::Json;

    let timestamp = chrono::Utc::now().to_rfc3339();

    // No persistent backends to probe; report the configured upstreams.
    let response = serde_json::json!({
        "status": "healthy",
        "service": "urlscope-backend",
        "timestamp": timestamp,
        "components": {
            "dns": serde_json::json!({
                "endpoint": state.config.dns.endpoint,
                "timeout_secs": state.config.dns.timeout_secs
            }),
            "geo": serde_json::json!({
                "endpoint": state.config.geo.endpoint,
                "timeout_secs": state.config.geo.timeout_secs
            })
        }
    });

    (StatusCode::OK, Json(response))
}
