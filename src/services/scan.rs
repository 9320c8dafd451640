// Full scan pipeline: parse, resolve, geolocate, score.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::services::dns::Resolver;
use crate::services::geo::GeoLookup;
use crate::utils::risk_scorer::{parse_url_loose, score_url_with_blacklist, Classification};
use crate::utils::scan_error::ScanError;

/// Wire payload for a completed scan. `status` carries the risk
/// classification under the field name the dashboard expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanReport {
    pub lat: f64,
    pub lon: f64,
    pub country: String,
    pub ip: String,
    pub score: u8,
    pub status: Classification,
}

pub struct ScanService {
    resolver: Arc<dyn Resolver>,
    geo: Arc<dyn GeoLookup>,
    blacklist: Vec<String>,
}

impl ScanService {
    pub fn new(
        resolver: Arc<dyn Resolver>,
        geo: Arc<dyn GeoLookup>,
        blacklist: Vec<String>,
    ) -> Self {
        Self {
            resolver,
            geo,
            blacklist,
        }
    }

    /// Resolve, geolocate and score a submitted target.
    ///
    /// The scoring step itself is total; only the enrichment lookups can
    /// fail. Hostname extraction uses the same loose parse as the scorer so
    /// the two never disagree about what was scanned.
    pub async fn scan(&self, url_input: &str) -> Result<ScanReport, ScanError> {
        let trimmed = url_input.trim();
        if trimmed.is_empty() {
            return Err(ScanError::MissingUrl);
        }

        let hostname = parse_url_loose(trimmed)
            .and_then(|u| u.host_str().map(|h| h.trim().to_lowercase()))
            .filter(|h| !h.is_empty())
            .ok_or(ScanError::InvalidUrl)?;

        let scan_id = Uuid::new_v4();
        info!(%scan_id, hostname = %hostname, "Starting URL scan");

        let ip = self.resolver.resolve_ipv4(&hostname).await.map_err(|e| {
            warn!(%scan_id, "DNS resolution failed: {}", e);
            e
        })?;

        let geo = self.geo.locate(&ip).await.map_err(|e| {
            warn!(%scan_id, ip = %ip, "Geo lookup failed: {}", e);
            e
        })?;

        let risk = score_url_with_blacklist(url_input, &self.blacklist);
        info!(
            %scan_id,
            ip = %ip,
            score = risk.score,
            rules = risk.triggered_rules.len(),
            "Scan complete"
        );

        Ok(ScanReport {
            lat: geo.lat,
            lon: geo.lon,
            country: geo.country,
            ip,
            score: risk.score,
            status: risk.classification,
        })
    }
}
