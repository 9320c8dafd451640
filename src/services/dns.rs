// Hostname to IPv4 resolution over DNS-over-HTTPS.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::utils::risk_scorer::is_raw_ip;

// =============================================================================
// ERROR TYPES
// =============================================================================

#[derive(Debug, Error)]
pub enum DnsError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("DNS resolve failed ({0})")]
    Http(u16),

    #[error("No A record found")]
    NoRecords,
}

// =============================================================================
// RESOLVER
// =============================================================================

/// Hostname resolution seam. The production implementation speaks
/// DNS-over-HTTPS; tests substitute a fixed mapping.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve_ipv4(&self, hostname: &str) -> Result<String, DnsError>;
}

#[derive(Debug, Deserialize)]
struct DohResponse {
    #[serde(rename = "Answer", default)]
    answers: Vec<DohAnswer>,
}

#[derive(Debug, Deserialize)]
struct DohAnswer {
    #[serde(rename = "type")]
    record_type: u16,
    data: String,
}

pub struct DohResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl DohResolver {
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
}

#[async_trait]
impl Resolver for DohResolver {
    async fn resolve_ipv4(&self, hostname: &str) -> Result<String, DnsError> {
        // IP literals need no lookup.
        if is_raw_ip(hostname) {
            return Ok(hostname.to_string());
        }

        let url = format!("{}/resolve", self.endpoint.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("name", hostname), ("type", "A")])
            .header("accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DnsError::Http(response.status().as_u16()));
        }

        let body: DohResponse = response.json().await?;
        debug!("DoH answer count for {}: {}", hostname, body.answers.len());

        // Type 1 is an A record.
        body.answers
            .into_iter()
            .filter(|a| a.record_type == 1 && !a.data.is_empty())
            .map(|a| a.data)
            .next()
            .ok_or(DnsError::NoRecords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ip_literal_short_circuits() {
        // Endpoint is unreachable on purpose; IP literals must not hit it.
        let resolver = DohResolver::new("https://127.0.0.1:1", 1);
        let ip = resolver.resolve_ipv4("203.0.113.5").await.unwrap();
        assert_eq!(ip, "203.0.113.5");
    }

    #[test]
    fn test_doh_answer_parsing() {
        let json = r#"{"Status":0,"Answer":[
            {"name":"example.com.","type":5,"TTL":300,"data":"alias.example.net."},
            {"name":"example.com.","type":1,"TTL":300,"data":"93.184.216.34"}
        ]}"#;
        let parsed: DohResponse = serde_json::from_str(json).unwrap();
        let first_a = parsed
            .answers
            .into_iter()
            .find(|a| a.record_type == 1)
            .unwrap();
        assert_eq!(first_a.data, "93.184.216.34");
    }

    #[test]
    fn test_doh_response_without_answers() {
        let parsed: DohResponse = serde_json::from_str(r#"{"Status":3}"#).unwrap();
        assert!(parsed.answers.is_empty());
    }
}
