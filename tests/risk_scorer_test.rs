// Risk scorer contract tests
// The scorer is pure: every property here must hold for any input.

use urlscope_backend_core::{
    score_url, score_url_with_blacklist, Classification, RuleId, DEFAULT_DOMAIN_BLACKLIST,
};

// =============================================================================
// TEST CORPUS
// =============================================================================

const CORPUS: &[&str] = &[
    "",
    "   ",
    "example.com",
    "https://example.com",
    "http://example.com",
    "http://secure-login.badactor.net",
    "http://203.0.113.5/verify?a=1&b=2&c=3&d=4&e=5",
    "https://badactor.net",
    "badactor.net",
    "not a url at all",
    "ftp://example.com/file",
    "https://a.b",
    "http://[2001:db8::1]/",
    "update-your-account.example/free-bonus?win=1",
    "https://www.еxample.com", // Cyrillic 'е'
    "https://this-is-a-rather-long-hostname-with-many-hyphens.example.org/path?q=1&r=2&s=3",
];

fn long_input() -> String {
    format!("https://example.org/{}", "a".repeat(150))
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn score_is_always_within_bounds() {
    let long = long_input();
    for input in CORPUS.iter().copied().chain(std::iter::once(long.as_str())) {
        let result = score_url(input);
        assert!(result.score <= 100, "input: {:?}", input);
    }
}

#[test]
fn classification_matches_score_tier() {
    for input in CORPUS {
        let result = score_url(input);
        let expected = match result.score {
            0..=20 => Classification::Safe,
            21..=50 => Classification::Suspicious,
            _ => Classification::Dangerous,
        };
        assert_eq!(result.classification, expected, "input: {:?}", input);
    }
}

#[test]
fn scoring_is_deterministic() {
    for input in CORPUS {
        let first = score_url(input);
        let second = score_url(input);
        assert_eq!(first, second, "input: {:?}", input);

        // Byte-identical over the wire as well.
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn triggered_rules_and_breakdown_agree() {
    for input in CORPUS {
        let result = score_url(input);
        assert_eq!(result.triggered_rules.len(), result.breakdown.len());
        for (rule, outcome) in result.triggered_rules.iter().zip(result.breakdown.iter()) {
            assert_eq!(*rule, outcome.rule, "input: {:?}", input);
        }
    }
}

#[test]
fn breakdown_points_sum_to_preclamp_score() {
    for input in CORPUS {
        let result = score_url(input);
        let sum: i32 = result.breakdown.iter().map(|o| o.points).sum();
        assert_eq!(result.score as i32, sum.clamp(0, 100), "input: {:?}", input);
        if (0..=100).contains(&sum) {
            assert_eq!(result.score as i32, sum, "input: {:?}", input);
        }
    }
}

#[test]
fn omitted_blacklist_equals_default_blacklist() {
    for input in CORPUS {
        assert_eq!(
            score_url(input),
            score_url_with_blacklist(input, DEFAULT_DOMAIN_BLACKLIST),
            "input: {:?}",
            input
        );
    }
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn scenario_keyword_subdomain_over_http() {
    let result = score_url("http://secure-login.badactor.net");
    assert_eq!(result.score, 50);
    assert_eq!(result.classification, Classification::Suspicious);
    assert_eq!(
        result.triggered_rules,
        vec![RuleId::PhishingKeywords, RuleId::UsesHttp]
    );
    // badactor.net is blacklisted; its subdomain must not be.
    assert!(!result.triggered_rules.contains(&RuleId::DomainBlacklisted));
}

#[test]
fn scenario_clean_https_domain() {
    let result = score_url("https://example.com");
    assert_eq!(result.score, 0);
    assert_eq!(result.classification, Classification::Safe);
    assert_eq!(result.triggered_rules, vec![RuleId::HttpsLongDomainBonus]);
}

#[test]
fn scenario_ip_host_with_query_noise() {
    let result = score_url("http://203.0.113.5/verify?a=1&b=2&c=3&d=4&e=5");
    assert_eq!(result.score, 95);
    assert_eq!(result.classification, Classification::Dangerous);
    assert_eq!(
        result.triggered_rules,
        vec![
            RuleId::PhishingKeywords,
            RuleId::RawIpHost,
            RuleId::SpecialCharsOver4,
            RuleId::UsesHttp,
        ]
    );
}

#[test]
fn scenario_empty_input() {
    for input in ["", "   ", "\t"] {
        let result = score_url(input);
        assert_eq!(result.score, 0);
        assert_eq!(result.classification, Classification::Safe);
        assert!(result.breakdown.is_empty());
    }
}

#[test]
fn scenario_length_rule_fires_alone_on_long_plain_text() {
    // Spaces keep both parse attempts failing, so only string rules apply.
    let input = "plain words and more plain words ".repeat(4);
    assert!(input.len() > 100);
    let result = score_url(&input);
    assert_eq!(result.triggered_rules, vec![RuleId::LengthOver100]);
    assert_eq!(result.score, 25);
}

#[test]
fn scenario_blacklist_override() {
    let custom = ["evil.example".to_string()];
    let result = score_url_with_blacklist("https://evil.example", &custom);
    assert!(result.triggered_rules.contains(&RuleId::DomainBlacklisted));
    // +25 blacklist, -20 https bonus (hostname length 12)
    assert_eq!(result.score, 5);

    // The default list no longer applies under an override.
    let result = score_url_with_blacklist("https://badactor.net", &custom);
    assert!(!result.triggered_rules.contains(&RuleId::DomainBlacklisted));
}
