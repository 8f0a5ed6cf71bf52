use super::*;
use crate::document::Method;

fn rule_codes(rules: &[Rule]) -> Vec<&'static str> {
    rules.iter().map(|rule| rule.code).collect()
}

#[test]
fn generic_table_covers_the_method_agnostic_codes() {
    let codes = rule_codes(GENERIC_RULES);
    assert_eq!(
        codes,
        vec![
            "200", "400", "401", "403", "404", "406", "409", "410", "412", "415", "429", "500",
            "503", "505"
        ]
    );
}

#[test]
fn every_rule_requires_a_log_token_header() {
    for rule in GENERIC_RULES {
        assert!(
            rule.headers.contains(&Header::LogToken),
            "generic rule {} lacks X-Log-Token",
            rule.code
        );
    }
    for method in [
        Method::Get,
        Method::Put,
        Method::Post,
        Method::Patch,
        Method::Delete,
    ] {
        for rule in verb_rules(method) {
            assert!(
                rule.headers.contains(&Header::LogToken),
                "{method} rule {} lacks X-Log-Token",
                rule.code
            );
        }
    }
}

#[test]
fn get_rules_exclude_write_only_codes() {
    let codes = rule_codes(verb_rules(Method::Get));
    assert!(!codes.contains(&"201"));
    assert!(!codes.contains(&"204"));
    assert!(codes.contains(&"304"));
    assert!(codes.contains(&"203"));
}

#[test]
fn post_and_put_share_the_same_applicable_set() {
    assert_eq!(
        rule_codes(verb_rules(Method::Post)),
        rule_codes(verb_rules(Method::Put))
    );
    assert!(rule_codes(verb_rules(Method::Post)).contains(&"201"));
}

#[test]
fn delete_admits_only_no_content_and_never_mutates_existing() {
    let rules = verb_rules(Method::Delete);
    assert_eq!(rule_codes(rules), vec!["204"]);
    assert!(rules[0].create_only);
}

#[test]
fn patch_admits_unprocessable_request() {
    assert_eq!(rule_codes(verb_rules(Method::Patch)), vec!["422"]);
}

#[test]
fn success_rule_carries_the_usual_headers() {
    let ok = GENERIC_RULES
        .iter()
        .find(|rule| rule.code == "200")
        .expect("200 rule");
    assert_eq!(ok.description, "OK.");
    for header in [
        Header::ContentType,
        Header::CacheControl,
        Header::Etag,
        Header::Expires,
        Header::LastModified,
        Header::ContentEncoding,
        Header::RateLimitLimit,
        Header::RateLimitLimit24h,
        Header::RateLimitRemaining,
        Header::RateLimitReset,
    ] {
        assert!(ok.headers.contains(&header), "200 lacks {}", header.name());
    }
}

#[test]
fn retryable_rules_carry_retry_after() {
    for code in ["429", "503"] {
        let rule = GENERIC_RULES
            .iter()
            .find(|rule| rule.code == code)
            .expect("rule");
        assert!(rule.headers.contains(&Header::RetryAfter));
    }
}

#[test]
fn redirect_rules_carry_location_and_expiry() {
    for rule in verb_rules(Method::Get) {
        if rule.code == "301" || rule.code == "307" {
            assert!(rule.headers.contains(&Header::Location));
            assert!(rule.headers.contains(&Header::Expires));
        }
    }
}
