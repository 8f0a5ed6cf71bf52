//! The canonical header catalog and the add-if-absent merge primitive.
use crate::document::{HeaderDefinition, Response};

/// Canonical response headers this tool documents.
///
/// Names and descriptions are fixed; rules reference catalog entries instead
/// of repeating strings per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    ContentType,
    CacheControl,
    Etag,
    Expires,
    LastModified,
    ContentEncoding,
    LogToken,
    RateLimitLimit,
    RateLimitLimit24h,
    RateLimitRemaining,
    RateLimitReset,
    Location,
    RetryAfter,
    AcceptPatch,
}

impl Header {
    /// Return the canonical header name.
    pub fn name(&self) -> &'static str {
        match self {
            Header::ContentType => "Content-Type",
            Header::CacheControl => "Cache-Control",
            Header::Etag => "ETag",
            Header::Expires => "Expires",
            Header::LastModified => "Last-Modified",
            Header::ContentEncoding => "Content-Encoding",
            Header::LogToken => "X-Log-Token",
            Header::RateLimitLimit => "X-RateLimit-Limit",
            Header::RateLimitLimit24h => "X-RateLimit-Limit-24h",
            Header::RateLimitRemaining => "X-RateLimit-Remaining",
            Header::RateLimitReset => "X-RateLimit-Reset",
            Header::Location => "Location",
            Header::RetryAfter => "Retry-After",
            Header::AcceptPatch => "Accept-Patch",
        }
    }

    /// Return the fixed consumer-facing description.
    pub fn description(&self) -> &'static str {
        match self {
            Header::ContentType => {
                "The concrete content-type returned from service - save on client for future \
                 versioning of the particular endpoint"
            }
            Header::CacheControl => "The consumer caching information",
            Header::Etag => "The entity tag",
            Header::Expires => "The information expiry time",
            Header::LastModified => "The information was changed at this time",
            Header::ContentEncoding => "The concrete content-encoding service",
            Header::LogToken => "A Correlation ID for consumer use",
            Header::RateLimitLimit => "X-RateLimit-Limit: Request limit per minute",
            Header::RateLimitLimit24h => "X-RateLimit-Limit-24h: Request limit per 24h",
            Header::RateLimitRemaining => {
                "X-RateLimit-Remaining: Requests left for the domain/resource for the 24h \
                 (locally determined)"
            }
            Header::RateLimitReset => {
                "X-RateLimit-Reset: The remaining window before the rate limit resets in UTC \
                 epoch seconds"
            }
            Header::Location => "The Location is used to state where resource can be found",
            Header::RetryAfter => "When can the resource be expected at the Location",
            Header::AcceptPatch => {
                "A list of the patch document formats supported by the resource"
            }
        }
    }

    /// Build the header definition stored in a response.
    pub fn definition(&self) -> HeaderDefinition {
        HeaderDefinition::string(self.description())
    }
}

/// The headers every documented content-bearing success response carries.
pub const USUAL_HEADERS: &[Header] = &[
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

/// Headers added to every response on a patch operation.
pub const PATCH_HEADERS: &[Header] = &[Header::AcceptPatch];

/// Add each header to the response unless one with that name already exists.
///
/// Existing definitions are never replaced, so author-supplied header
/// documentation always wins.
pub fn add_headers(response: &mut Response, headers: &[Header]) {
    for header in headers {
        response
            .headers
            .entry(header.name().to_string())
            .or_insert_with(|| header.definition());
    }
}
