// src/classifier/summary.rs
// =============================================================================
// This module defines the output side of the pipeline: what one classified
// URL looks like (LinkResult) and what a whole batch looks like (Summary).
//
// Key invariants (the tests lean on these):
// - Every input candidate yields exactly one LinkResult, even skipped ones
// - Summary counts always equal the partition sizes of the results list
// - The results list is in original input order
//
// Rust concepts:
// - Enums: To represent the three possible outcomes for a URL
// - #[derive(Serialize, Deserialize)]: JSON conversion for downstream consumers
// - matches!: A macro for concise pattern tests
// =============================================================================

use serde::{Deserialize, Serialize};

// The three ways a candidate URL can end up
//
// #[serde(rename_all = "snake_case")] so JSON consumers see "valid"/"broken"/
// "skipped" rather than Rust-style capitalized names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStatus {
    /// The HEAD request returned a status below 400, or an exception rule
    /// accepted the status it did return
    Valid,
    /// The HEAD request returned 4xx/5xx with no matching exception rule,
    /// or the request failed outright (DNS, timeout, malformed URL)
    Broken,
    /// The candidate was filtered out before any network call
    /// (missing/empty href, mailto:, tel:)
    Skipped,
}

// The outcome for a single candidate URL
//
// Immutable once created: the pipeline builds these and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkResult {
    /// The candidate as it was supplied (empty string for a missing href)
    pub url: String,
    /// How the candidate was classified
    pub status: LinkStatus,
    /// The HTTP status code, when a response was actually received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// Failure description for Broken results, or the skip reason for
    /// Skipped ones; None for a plain Valid result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LinkResult {
    /// A result for a URL that answered with an acceptable status
    pub fn valid(url: String, http_status: u16) -> Self {
        Self {
            url,
            status: LinkStatus::Valid,
            http_status: Some(http_status),
            error: None,
        }
    }

    /// A result for a URL that answered with an unacceptable status
    pub fn broken(url: String, http_status: u16) -> Self {
        Self {
            url,
            status: LinkStatus::Broken,
            http_status: Some(http_status),
            error: Some(format!("HTTP {}", http_status)),
        }
    }

    /// A result for a URL whose request never produced a status code
    /// (DNS failure, connection refused, timeout, malformed URL)
    pub fn transport_failure(url: String, message: String) -> Self {
        Self {
            url,
            status: LinkStatus::Broken,
            http_status: None,
            error: Some(message),
        }
    }

    /// A result for a candidate that was filtered out before dispatch
    pub fn skipped(url: String, reason: String) -> Self {
        Self {
            url,
            status: LinkStatus::Skipped,
            http_status: None,
            error: Some(reason),
        }
    }

    /// Helper to check whether this link is fine
    pub fn is_valid(&self) -> bool {
        matches!(self.status, LinkStatus::Valid)
    }
}

// The aggregate outcome of one classification batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// How many candidates classified Valid
    pub valid_count: usize,
    /// How many candidates classified Broken (including batch timeouts)
    pub broken_count: usize,
    /// How many candidates were filtered before dispatch
    pub skipped_count: usize,
    /// One entry per input candidate, in original input order
    pub results: Vec<LinkResult>,
}

impl Summary {
    /// Builds a Summary from an ordered result list, deriving the counts
    /// from the partition so they can never disagree with the list
    pub fn from_results(results: Vec<LinkResult>) -> Self {
        let valid_count = results.iter().filter(|r| r.status == LinkStatus::Valid).count();
        let broken_count = results.iter().filter(|r| r.status == LinkStatus::Broken).count();
        let skipped_count = results.iter().filter(|r| r.status == LinkStatus::Skipped).count();

        Self {
            valid_count,
            broken_count,
            skipped_count,
            results,
        }
    }

    /// True when at least one candidate came back Broken
    pub fn has_broken_links(&self) -> bool {
        self.broken_count > 0
    }

    /// Total number of candidates this batch saw
    pub fn total(&self) -> usize {
        self.results.len()
    }
}
