//! Declarative response rules: code-level and verb-scoped tables.
//!
//! Each rule is pure data consumed by the one merge routine in `response`,
//! so the tables can be tested independently of any document.
use super::headers::{Header, USUAL_HEADERS};
use crate::document::Method;

/// One response requirement: status code, default description, required headers.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub code: &'static str,
    pub description: &'static str,
    pub headers: &'static [Header],
    /// When set, an already-present response is left completely untouched.
    pub create_only: bool,
}

const fn rule(code: &'static str, description: &'static str, headers: &'static [Header]) -> Rule {
    Rule {
        code,
        description,
        headers,
        create_only: false,
    }
}

const LOG_TOKEN_ONLY: &[Header] = &[Header::LogToken];
const RETRY_HEADERS: &[Header] = &[Header::RetryAfter, Header::LogToken];
const REDIRECT_HEADERS: &[Header] = &[Header::Location, Header::LogToken, Header::Expires];
const ACCEPTED_HEADERS: &[Header] = &[Header::Location, Header::RetryAfter, Header::LogToken];
const CREATED_HEADERS: &[Header] = &[
    Header::Location,
    Header::ContentType,
    Header::CacheControl,
    Header::Etag,
    Header::Expires,
    Header::LastModified,
    Header::ContentEncoding,
    Header::LogToken,
    Header::RateLimitLimit,
    Header::RateLimitLimit24h,
    Header::RateLimitRemaining,
    Header::RateLimitReset,
];

/// Rules applied to every operation regardless of its HTTP method.
pub const GENERIC_RULES: &[Rule] = &[
    rule("200", "OK.", USUAL_HEADERS),
    rule(
        "400",
        "Bad Request - the contents of the request were semantically or syntactically wrong.",
        LOG_TOKEN_ONLY,
    ),
    rule("401", "Not Authorized for the resource.", LOG_TOKEN_ONLY),
    rule("403", "Forbidden access to the resource.", LOG_TOKEN_ONLY),
    rule("404", "Resource Not Found", LOG_TOKEN_ONLY),
    rule(
        "406",
        "Not Acceptable - Possible mismatch between headers and content",
        LOG_TOKEN_ONLY,
    ),
    rule(
        "409",
        "Conflict - state of resource may have changed.",
        LOG_TOKEN_ONLY,
    ),
    rule("410", "Gone - resource is no longer available.", LOG_TOKEN_ONLY),
    rule(
        "412",
        "Precondition Failed - result from state of headers.",
        LOG_TOKEN_ONLY,
    ),
    rule(
        "415",
        "Content-Type not supported by Resource",
        LOG_TOKEN_ONLY,
    ),
    rule(
        "429",
        "Too much load is added from the client side into the service and the client is \
         requested to limit the number of requests - as the limits has been reached",
        RETRY_HEADERS,
    ),
    rule(
        "500",
        "The server experienced a currently unknown problem",
        LOG_TOKEN_ONLY,
    ),
    rule("503", "The service is unavailable", RETRY_HEADERS),
    rule("505", "HTTP Version not supported", LOG_TOKEN_ONLY),
];

const ACCEPTED: Rule = rule(
    "202",
    "Request accepted for further processing.",
    ACCEPTED_HEADERS,
);
const MOVED: Rule = rule("301", "Resource has moved.", REDIRECT_HEADERS);
const REDIRECT: Rule = rule(
    "307",
    "Temporary Redirect - Resource is available shortly else where",
    REDIRECT_HEADERS,
);
const CREATED: Rule = rule("201", "Resource Created.", CREATED_HEADERS);
const GONE: Rule = rule("410", "Gone - resource is no longer available.", LOG_TOKEN_ONLY);
const NOT_IMPLEMENTED: Rule = rule(
    "501",
    "This method is currently not implemented",
    LOG_TOKEN_ONLY,
);

const GET_RULES: &[Rule] = &[
    ACCEPTED,
    rule("203", "Non Authoritative Information", LOG_TOKEN_ONLY),
    MOVED,
    rule("304", "Not Modified - Resource was not updated", LOG_TOKEN_ONLY),
    REDIRECT,
    rule("404", "Resource Not Found", LOG_TOKEN_ONLY),
    GONE,
    NOT_IMPLEMENTED,
];

// POST and PUT document the same applicable subset.
const WRITE_RULES: &[Rule] = &[
    CREATED,
    ACCEPTED,
    MOVED,
    REDIRECT,
    GONE,
    rule(
        "412",
        "Precondition Failed - result from state of headers.",
        LOG_TOKEN_ONLY,
    ),
    rule(
        "415",
        "Content-Type not supported by Resource",
        LOG_TOKEN_ONLY,
    ),
    rule(
        "429",
        "Too much load is added from the client side into the service and the client is \
         requested to limit the number of requests - as the limits has been reached",
        RETRY_HEADERS,
    ),
    rule(
        "500",
        "The server experienced a currently unknown problem",
        LOG_TOKEN_ONLY,
    ),
    NOT_IMPLEMENTED,
    rule("503", "The service is unavailable", RETRY_HEADERS),
    rule("505", "HTTP Version not supported", LOG_TOKEN_ONLY),
];

const PATCH_RULES: &[Rule] = &[rule(
    "422",
    "Unprocessable Request - illegal modification of resource",
    LOG_TOKEN_ONLY,
)];

// An existing 204 is deliberately left untouched, headers included.
const DELETE_RULES: &[Rule] = &[Rule {
    code: "204",
    description: "Request accepted Nothing Returned.",
    headers: LOG_TOKEN_ONLY,
    create_only: true,
}];

/// Return the rules scoped to one HTTP method.
///
/// A requested code missing from the returned table (and from the generic
/// table) is silently ignored for that method.
pub fn verb_rules(method: Method) -> &'static [Rule] {
    match method {
        Method::Get => GET_RULES,
        Method::Post | Method::Put => WRITE_RULES,
        Method::Patch => PATCH_RULES,
        Method::Delete => DELETE_RULES,
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
