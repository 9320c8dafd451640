// Utility modules for Urlscope Backend

pub mod risk_scorer;
pub mod rule_labels;
pub mod scan_error;
pub mod validation;

pub use risk_scorer::{
    is_raw_ip, parse_url_loose, score_url, score_url_with_blacklist, Classification, RiskResult,
    RuleId, RuleOutcome, DEFAULT_DOMAIN_BLACKLIST,
};
pub use rule_labels::{label_for, rule_label};
pub use scan_error::ScanError;
pub use validation::trim_and_validate_field;
