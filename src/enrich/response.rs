//! The single merge primitive every rule goes through.
use super::headers::add_headers;
use super::rules::Rule;
use crate::document::{Operation, Response};

/// Apply one rule to an operation's response set.
///
/// Creates the response with the rule's default description when absent; an
/// existing response keeps its description. Headers are only ever added,
/// never replaced. A `create_only` rule leaves an existing response entirely
/// alone. Returns whether a new response was created.
pub fn apply(operation: &mut Operation, rule: &Rule) -> bool {
    if rule.create_only && operation.responses.contains_key(rule.code) {
        return false;
    }
    let mut created = false;
    let response = operation
        .responses
        .entry(rule.code.to_string())
        .or_insert_with(|| {
            created = true;
            Response {
                description: Some(rule.description.to_string()),
                ..Response::default()
            }
        });
    add_headers(response, rule.headers);
    created
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
