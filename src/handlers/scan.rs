// URL scan API endpoint
// Accepts a target, enriches it with DNS + geo context and scores it.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    app::AppState,
    utils::{scan_error::ScanError, validation::trim_and_validate_field},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ScanRequest {
    /// Raw domain or URL to investigate
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,
}

/// Scan a URL: resolve its hostname, geolocate the IP and score the target.
/// POST /api/v1/scan
#[utoipa::path(
    post,
    path = "/api/v1/scan",
    tag = "Scan",
    operation_id = "scanUrl",
    request_body = ScanRequest,
    responses(
        (status = 200, description = "Scan completed", body = crate::services::ScanReport),
        (status = 400, description = "Missing or invalid url"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "DNS resolution or geo lookup failed")
    )
)]
pub async fn scan_url(
    State(state): State<AppState>,
    payload: Result<Json<ScanRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Malformed or field-less bodies are treated the same as a blank url.
    let Ok(Json(request)) = payload else {
        return ScanError::MissingUrl.into_response();
    };

    if let Err(e) = request.validate() {
        return ScanError::from(e).into_response();
    }

    let target = match trim_and_validate_field(&request.url, true) {
        Ok(target) => target,
        Err(_) => return ScanError::MissingUrl.into_response(),
    };

    info!("Scan requested for target of {} chars", target.chars().count());

    match state.scan_service.scan(&target).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => e.into_response(),
    }
}
