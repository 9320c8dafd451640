// Application state and configuration
use std::sync::Arc;

use crate::{
    app_config::AppConfig,
    services::{DohResolver, IpWhoisClient, ScanService},
};

// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub scan_service: Arc<ScanService>,
}

impl AppState {
    /// Wire the production resolver and geo client from config.
    pub fn from_config(config: AppConfig) -> Self {
        let resolver = Arc::new(DohResolver::new(
            config.dns.endpoint.clone(),
            config.dns.timeout_secs,
        ));
        let geo = Arc::new(IpWhoisClient::new(
            config.geo.endpoint.clone(),
            config.geo.timeout_secs,
        ));
        let scan_service = Arc::new(ScanService::new(
            resolver,
            geo,
            config.security.domain_blacklist.clone(),
        ));

        Self {
            config: Arc::new(config),
            scan_service,
        }
    }
}
