// Analyst-friendly labels for risk rule identifiers.
// Display-layer only; never feeds back into scoring.

use crate::utils::risk_scorer::RuleId;

/// Label for a known rule, or a title-cased rendering of the identifier for
/// anything unrecognized.
pub fn rule_label(rule_id: &str) -> String {
    match rule_id {
        "phishing_keywords" => "Phishing keywords".to_string(),
        "length_over_100" => "Excessive URL length".to_string(),
        "raw_ip_host" => "Raw IP hostname".to_string(),
        "special_chars_over_4" => "High special-character density".to_string(),
        "domain_blacklisted" => "Domain blacklisted".to_string(),
        "uses_http" => "Insecure protocol (HTTP)".to_string(),
        "https_long_domain_bonus" => "HTTPS reputation bonus".to_string(),
        other => title_case_from_id(other),
    }
}

/// Convenience overload for the typed rule ids.
pub fn label_for(rule: RuleId) -> String {
    rule_label(rule.as_str())
}

fn title_case_from_id(id: &str) -> String {
    id.split(|c| c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
