// Error taxonomy for the scan pipeline, surfaced as JSON bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::{dns::DnsError, geo::GeoError};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Missing url")]
    MissingUrl,

    #[error("Invalid URL")]
    InvalidUrl,

    #[error("DNS resolution failed: {0}")]
    DnsResolution(#[from] DnsError),

    #[error("Geo lookup failed: {0}")]
    GeoLookup(#[from] GeoError),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl IntoResponse for ScanError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ScanError::MissingUrl => (StatusCode::BAD_REQUEST, "Missing url".to_string()),
            ScanError::InvalidUrl => (StatusCode::BAD_REQUEST, "Invalid URL".to_string()),
            ScanError::DnsResolution(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ScanError::GeoLookup(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ScanError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for ScanError {
    fn from(error: validator::ValidationErrors) -> Self {
        ScanError::ValidationError(error.to_string())
    }
}
