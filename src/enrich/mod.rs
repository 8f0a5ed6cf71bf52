//! Response enrichment: policy resolution, rule tables, and the merge engine.
//!
//! The engine is a total, idempotent in-place transformation: generic rules
//! run for every operation, then the rules scoped to the operation's method.
//! Merging is strictly additive, so author-supplied descriptions and headers
//! are never overwritten and re-running a pass changes nothing.
use crate::document::{Document, Method, Operation};
use std::collections::BTreeSet;

mod headers;
mod policy;
mod response;
mod rules;

pub use headers::{add_headers, Header, PATCH_HEADERS, USUAL_HEADERS};
pub use policy::{resolve, PolicyProfile, MINIMAL_CODES, STANDARD_CODES};
pub use response::apply;
pub use rules::{verb_rules, Rule, GENERIC_RULES};

/// Counts from one enrichment pass, reported for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnrichStats {
    pub operations: usize,
    pub responses_added: usize,
}

/// Enrich every operation in the document with the resolved code set.
///
/// Only codes present in `codes` produce responses, and only where the
/// operation's method admits them. Unrelated paths and operations are never
/// touched.
pub fn enrich(document: &mut Document, codes: &BTreeSet<String>) -> EnrichStats {
    let mut stats = EnrichStats::default();
    for (path, item) in &mut document.paths {
        for (method, operation) in item.operations_mut() {
            enrich_operation(operation, method, codes, &mut stats);
            tracing::debug!(path = %path, method = %method, "enriched operation");
        }
    }
    tracing::info!(
        operations = stats.operations,
        responses_added = stats.responses_added,
        "enrichment pass complete"
    );
    stats
}

fn enrich_operation(
    operation: &mut Operation,
    method: Method,
    codes: &BTreeSet<String>,
    stats: &mut EnrichStats,
) {
    stats.operations += 1;
    for rule in GENERIC_RULES {
        if codes.contains(rule.code) && apply(operation, rule) {
            stats.responses_added += 1;
        }
    }
    for rule in verb_rules(method) {
        if codes.contains(rule.code) && apply(operation, rule) {
            stats.responses_added += 1;
        }
    }
    // Patch headers go on after the 422 rule so one pass reaches a fixpoint.
    if method == Method::Patch {
        for response in operation.responses.values_mut() {
            add_headers(response, PATCH_HEADERS);
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
