//! Status-code policy profiles and resolution.
use clap::ValueEnum;
use std::collections::BTreeSet;

/// Codes enriched under the `standard` profile, and when nothing is configured.
pub const STANDARD_CODES: &[&str] = &[
    "200", "201", "202", "203", "204", "301", "304", "307", "400", "401", "403", "404", "406",
    "409", "410", "412", "415", "422", "429", "500", "501", "503", "505",
];

/// The reduced `minimal` profile.
pub const MINIMAL_CODES: &[&str] = &["200", "202", "204", "301", "400", "404", "415", "500"];

/// Named status-code profiles selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyProfile {
    Minimal,
    Standard,
}

impl PolicyProfile {
    /// Return the codes this profile resolves to.
    pub fn codes(&self) -> &'static [&'static str] {
        match self {
            PolicyProfile::Minimal => MINIMAL_CODES,
            PolicyProfile::Standard => STANDARD_CODES,
        }
    }
}

/// Resolve configuration into the concrete set of status codes to enrich.
///
/// A named profile wins over explicit codes; with neither (or an explicit set
/// that is blank after trimming) the `standard` profile is the safe default.
/// Unrecognized codes pass through untouched and simply match no rule.
pub fn resolve(profile: Option<PolicyProfile>, codes: &[String]) -> BTreeSet<String> {
    if let Some(profile) = profile {
        return to_set(profile.codes());
    }
    let explicit: BTreeSet<String> = codes
        .iter()
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .collect();
    if explicit.is_empty() {
        return to_set(STANDARD_CODES);
    }
    explicit
}

fn to_set(codes: &[&str]) -> BTreeSet<String> {
    codes.iter().map(|code| (*code).to_string()).collect()
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
