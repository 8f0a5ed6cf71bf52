use super::*;
use crate::document::{HeaderDefinition, Operation};
use crate::enrich::Header;
use std::collections::BTreeMap;

fn empty_operation() -> Operation {
    Operation {
        responses: BTreeMap::new(),
        extra: BTreeMap::new(),
    }
}

const NOT_FOUND: Rule = Rule {
    code: "404",
    description: "Resource Not Found",
    headers: &[Header::LogToken],
    create_only: false,
};

#[test]
fn creates_missing_response_with_default_description_and_headers() {
    let mut operation = empty_operation();
    let created = apply(&mut operation, &NOT_FOUND);

    assert!(created);
    let response = &operation.responses["404"];
    assert_eq!(response.description.as_deref(), Some("Resource Not Found"));
    assert_eq!(
        response.headers["X-Log-Token"].description.as_deref(),
        Some("A Correlation ID for consumer use")
    );
    assert_eq!(response.headers["X-Log-Token"].kind.as_deref(), Some("string"));
}

#[test]
fn existing_description_is_never_replaced() {
    let mut operation = empty_operation();
    operation.responses.insert(
        "404".to_string(),
        Response {
            description: Some("Widget is gone".to_string()),
            ..Response::default()
        },
    );

    let created = apply(&mut operation, &NOT_FOUND);

    assert!(!created);
    assert_eq!(
        operation.responses["404"].description.as_deref(),
        Some("Widget is gone")
    );
    assert!(operation.responses["404"].headers.contains_key("X-Log-Token"));
}

#[test]
fn existing_header_is_never_replaced() {
    let mut operation = empty_operation();
    let mut response = Response::default();
    response.headers.insert(
        "X-Log-Token".to_string(),
        HeaderDefinition::string("our own correlation id"),
    );
    operation.responses.insert("404".to_string(), response);

    apply(&mut operation, &NOT_FOUND);

    assert_eq!(
        operation.responses["404"].headers["X-Log-Token"]
            .description
            .as_deref(),
        Some("our own correlation id")
    );
}

#[test]
fn create_only_rule_leaves_existing_response_untouched() {
    let no_content = Rule {
        code: "204",
        description: "Request accepted Nothing Returned.",
        headers: &[Header::LogToken],
        create_only: true,
    };

    let mut operation = empty_operation();
    operation
        .responses
        .insert("204".to_string(), Response::default());

    let created = apply(&mut operation, &no_content);

    assert!(!created);
    let response = &operation.responses["204"];
    assert!(response.description.is_none());
    assert!(response.headers.is_empty());
}

#[test]
fn applying_the_same_rule_twice_is_idempotent() {
    let mut operation = empty_operation();
    apply(&mut operation, &NOT_FOUND);
    let first = operation.clone();
    apply(&mut operation, &NOT_FOUND);
    assert_eq!(operation, first);
}
