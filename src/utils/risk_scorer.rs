// Deterministic URL risk scoring
// Shared by the interactive scoring API and the scan pipeline so both
// surfaces always agree on score, classification and breakdown.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Keywords checked as substrings over the entire submitted string, not just
/// the hostname. A path like `/secure-login` fires the rule.
const PHISHING_KEYWORDS: &[&str] = &[
    "login", "verify", "update", "secure", "account", "free", "bonus", "win",
];

const SPECIAL_CHARS: &[char] = &['?', '&', '%', '=', '@', '-', '_'];

/// Built-in blacklist. Matching is exact-hostname, case-insensitive; callers
/// may pass their own list instead.
pub const DEFAULT_DOMAIN_BLACKLIST: &[&str] = &[
    "example-phish.com",
    "badactor.net",
    "malware-test.invalid",
];

lazy_static! {
    /// Strict dotted-quad IPv4: octets 0-255, no leading zeros.
    static ref IPV4_PATTERN: Regex = Regex::new(
        r"^(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)(?:\.(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)){3}$"
    )
    .expect("Invalid IPv4 pattern regex");
}

// =============================================================================
// DATA STRUCTURES
// =============================================================================

/// Identifiers for the scoring rules, in evaluation order. Serialized ids
/// are renamed explicitly; snake_case inference would mangle the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleId {
    #[serde(rename = "phishing_keywords")]
    PhishingKeywords,
    #[serde(rename = "length_over_100")]
    LengthOver100,
    #[serde(rename = "raw_ip_host")]
    RawIpHost,
    #[serde(rename = "special_chars_over_4")]
    SpecialCharsOver4,
    #[serde(rename = "domain_blacklisted")]
    DomainBlacklisted,
    #[serde(rename = "uses_http")]
    UsesHttp,
    #[serde(rename = "https_long_domain_bonus")]
    HttpsLongDomainBonus,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::PhishingKeywords => "phishing_keywords",
            RuleId::LengthOver100 => "length_over_100",
            RuleId::RawIpHost => "raw_ip_host",
            RuleId::SpecialCharsOver4 => "special_chars_over_4",
            RuleId::DomainBlacklisted => "domain_blacklisted",
            RuleId::UsesHttp => "uses_http",
            RuleId::HttpsLongDomainBonus => "https_long_domain_bonus",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-tier classification derived from the clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Classification {
    Safe,       // 0-20
    Suspicious, // 21-50
    Dangerous,  // 51-100
}

impl Classification {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=20 => Classification::Safe,
            21..=50 => Classification::Suspicious,
            _ => Classification::Dangerous,
        }
    }
}

/// One fired rule with its point delta and a deterministic explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: RuleId,
    pub points: i32,
    pub detail: String,
}

/// Scoring result. `triggered_rules` and `breakdown` share length and order;
/// `score` is the signed sum of fired points clamped to 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResult {
    pub score: u8,
    pub classification: Classification,
    pub triggered_rules: Vec<RuleId>,
    pub breakdown: Vec<RuleOutcome>,
}

// =============================================================================
// URL PARSING HELPERS
// =============================================================================

/// Best-effort URL parse: try the trimmed input as-is, then retry with a
/// prepended `https://` so bare domains work. Returns None for input that
/// fails both attempts; scoring still proceeds on the raw string rules.
pub fn parse_url_loose(input: &str) -> Option<Url> {
    let raw = input.trim();
    if raw.is_empty() {
        return None;
    }

    Url::parse(raw)
        .or_else(|_| Url::parse(&format!("https://{}", raw)))
        .ok()
}

/// IP-literal check used by the raw_ip_host rule. IPv4 is matched strictly;
/// IPv6 uses a permissive heuristic (>=2 colons, hex/colon charset only) that
/// is a known precision limitation kept for parity across both scoring
/// call sites. Bracketed IPv6 hosts do not match the heuristic.
pub fn is_raw_ip(hostname: &str) -> bool {
    let h = hostname.trim();

    if IPV4_PATTERN.is_match(h) {
        return true;
    }

    if !h.contains(':') || !h.chars().all(|c| c.is_ascii_hexdigit() || c == ':') {
        return false;
    }

    h.matches(':').count() >= 2
}

fn count_special_chars(value: &str) -> usize {
    value.chars().filter(|c| SPECIAL_CHARS.contains(c)).count()
}

// =============================================================================
// SCORING
// =============================================================================

/// Score a target with the built-in blacklist.
pub fn score_url(target: &str) -> RiskResult {
    score_url_with_blacklist(target, DEFAULT_DOMAIN_BLACKLIST)
}

/// Score a raw domain/URL string. Pure and total: never fails, never touches
/// the network, identical input always yields identical output.
///
/// Rules evaluate in a fixed order with no short-circuiting; each fires at
/// most once and contributes a signed point delta. The raw sum can go
/// negative (the HTTPS bonus) and is clamped to 0..=100 at the end.
pub fn score_url_with_blacklist<S: AsRef<str>>(target: &str, blacklist: &[S]) -> RiskResult {
    let mut triggered_rules = Vec::new();
    let mut breakdown: Vec<RuleOutcome> = Vec::new();
    let mut raw_score: i32 = 0;

    let normalized = target.trim();
    let normalized_lower = normalized.to_lowercase();

    let blacklist: Vec<String> = blacklist
        .iter()
        .map(|d| d.as_ref().trim().to_lowercase())
        .collect();

    let url = parse_url_loose(target);
    let hostname = url
        .as_ref()
        .and_then(|u| u.host_str())
        .map(|h| h.to_lowercase())
        .unwrap_or_default();
    let scheme = url.as_ref().map(|u| u.scheme()).unwrap_or_default();

    let mut fire = |rule: RuleId, points: i32, detail: String| {
        raw_score += points;
        triggered_rules.push(rule);
        breakdown.push(RuleOutcome {
            rule,
            points,
            detail,
        });
    };

    // Rule 1: +30 phishing keywords anywhere in the input
    let matched_keywords: Vec<&str> = PHISHING_KEYWORDS
        .iter()
        .filter(|k| normalized_lower.contains(*k))
        .copied()
        .collect();
    if !matched_keywords.is_empty() {
        fire(
            RuleId::PhishingKeywords,
            30,
            format!("Matched keywords: {}", matched_keywords.join(", ")),
        );
    }

    // Rule 2: +25 input length > 100
    let length = normalized.chars().count();
    if length > 100 {
        fire(RuleId::LengthOver100, 25, format!("Length: {}", length));
    }

    // Rule 3: +30 raw IP hostname
    if !hostname.is_empty() && is_raw_ip(&hostname) {
        fire(
            RuleId::RawIpHost,
            30,
            format!("Hostname is an IP: {}", hostname),
        );
    }

    // Rule 4: +15 more than 4 special characters in the whole input
    let special_count = count_special_chars(normalized);
    if special_count > 4 {
        fire(
            RuleId::SpecialCharsOver4,
            15,
            format!("Special characters count: {}", special_count),
        );
    }

    // Rule 5: +25 blacklisted hostname (exact match, no subdomain expansion)
    if !hostname.is_empty() && blacklist.iter().any(|d| d == &hostname) {
        fire(
            RuleId::DomainBlacklisted,
            25,
            format!("Blacklisted domain: {}", hostname),
        );
    }

    // Rule 6: +20 plain http
    if scheme == "http" {
        fire(RuleId::UsesHttp, 20, "URL uses http".to_string());
    }

    // Rule 7: -20 https with hostname longer than 6 characters
    if scheme == "https" && hostname.chars().count() > 6 {
        fire(
            RuleId::HttpsLongDomainBonus,
            -20,
            format!("HTTPS + hostname length {}", hostname.chars().count()),
        );
    }

    let score = raw_score.clamp(0, 100) as u8;

    RiskResult {
        score,
        classification: Classification::from_score(score),
        triggered_rules,
        breakdown,
    }
}

// =============================================================================
// TESTS
// =============================================================================
