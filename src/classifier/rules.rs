// src/classifier/rules.rs
// =============================================================================
// This module makes the "known site quirk" policy declarative.
//
// Some sites answer HEAD requests with status codes that would normally mean
// "broken" but are really just the site being idiosyncratic. The canonical
// example: LinkedIn rejects HEAD probes with the non-standard code 999
// (see https://stackoverflow.com/questions/27231113).
//
// Rather than hard-coding `if url.starts_with("https://www.linkedin.com")`
// in the classification logic, we keep an ordered list of rules:
//
//   (URL prefix) -> (status code to accept anyway)
//
// Rules are evaluated top-down; the first rule whose prefix matches the URL
// AND whose expected code equals the observed code wins. A prefix match with
// a different code keeps scanning, so two rules may cover the same domain
// with different accepted codes.
//
// Rust concepts:
// - Structs with constructors: `ClassificationRule::new(prefix, code)`
// - Slices of rules: the policy is data, not branching
// - serde derive: rules can be loaded from configuration files
// =============================================================================

use serde::{Deserialize, Serialize};

/// The status code LinkedIn answers HEAD probes with
const LINKEDIN_HEAD_STATUS: u16 = 999;

// Maps a URL-prefix pattern to a status code that should be accepted as
// Valid even though it is >= 400 (or otherwise non-standard)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    /// URLs starting with this prefix are covered by the rule
    pub prefix: String,
    /// The exceptional status code the rule accepts as Valid
    pub expected_status: u16,
}

impl ClassificationRule {
    pub fn new(prefix: impl Into<String>, expected_status: u16) -> Self {
        Self {
            prefix: prefix.into(),
            expected_status,
        }
    }

    /// The one built-in quirk from the observed production behavior:
    /// LinkedIn pages answer HEAD requests with 999 instead of 200
    pub fn linkedin_head_quirk() -> Self {
        Self::new("https://www.linkedin.com", LINKEDIN_HEAD_STATUS)
    }

    /// Does this rule cover the given URL?
    pub fn matches(&self, url: &str) -> bool {
        url.starts_with(&self.prefix)
    }

    /// Does this rule accept the given (url, status) pair as Valid?
    pub fn accepts(&self, url: &str, status: u16) -> bool {
        self.matches(url) && status == self.expected_status
    }
}

// Scans the rule list top-down for a rule that accepts this outcome
//
// Returns the accepting rule so the caller can mention it in the result.
pub fn find_accepting_rule<'a>(
    rules: &'a [ClassificationRule],
    url: &str,
    status: u16,
) -> Option<&'a ClassificationRule> {
    rules.iter().find(|rule| rule.accepts(url, status))
}
