// IP geolocation client (ipwho.is style no-key endpoint).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Geo lookup failed ({0})")]
    Http(u16),

    #[error("{0}")]
    Lookup(String),

    #[error("Geo lookup returned invalid coordinates")]
    InvalidCoordinates,
}

// =============================================================================
// DATA STRUCTURES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
    pub country: String,
}

#[derive(Debug, Deserialize)]
struct IpWhoisResponse {
    #[serde(default)]
    success: bool,
    latitude: Option<f64>,
    longitude: Option<f64>,
    country: Option<String>,
    message: Option<String>,
}

// =============================================================================
// GEO LOOKUP
// =============================================================================

/// Geolocation seam; tests substitute fixed coordinates.
#[async_trait]
pub trait GeoLookup: Send + Sync {
    async fn locate(&self, ip: &str) -> Result<GeoLocation, GeoError>;
}

pub struct IpWhoisClient {
    client: reqwest::Client,
    endpoint: String,
}

impl IpWhoisClient {
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("Urlscope-Scanner/1.0")
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    fn location_from(body: IpWhoisResponse) -> Result<GeoLocation, GeoError> {
        if !body.success {
            let message = body
                .message
                .unwrap_or_else(|| "Unknown geo lookup error".to_string());
            return Err(GeoError::Lookup(message));
        }

        let lat = body.latitude.filter(|v| v.is_finite());
        let lon = body.longitude.filter(|v| v.is_finite());
        let (lat, lon) = match (lat, lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => return Err(GeoError::InvalidCoordinates),
        };

        let country = match body.country {
            Some(c) if !c.is_empty() => c,
            _ => "—".to_string(),
        };

        Ok(GeoLocation { lat, lon, country })
    }
}

#[async_trait]
impl GeoLookup for IpWhoisClient {
    async fn locate(&self, ip: &str) -> Result<GeoLocation, GeoError> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), ip);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GeoError::Http(response.status().as_u16()));
        }

        let body: IpWhoisResponse = response.json().await?;
        Self::location_from(body)
    }
}
