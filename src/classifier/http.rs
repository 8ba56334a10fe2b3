// src/classifier/http.rs
// =============================================================================
// This module is the dispatch stage: it probes one URL and turns whatever
// happens into a LinkResult.
//
// Key functionality:
// - Makes an HTTP HEAD request (lightweight, no body download)
// - Applies the classification policy: < 400 is Valid, >= 400 consults the
//   exception rules, anything else is Broken
// - Categorizes transport failures (DNS, refused connection, timeout, ...)
//   into readable messages - a failed probe is data, never a crash
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - match: To handle success and the various error shapes exhaustively
// - Borrowed vs owned: the client and rules are borrowed, the URL is owned
//   because it ends up inside the LinkResult
// =============================================================================

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::rules::{find_accepting_rule, ClassificationRule};
use super::summary::LinkResult;

// Probes a single URL and classifies the outcome
//
// This never returns an error: every possible outcome (good status, bad
// status, malformed URL, transport failure) becomes a LinkResult so the
// rest of the batch is unaffected.
pub async fn check_single_link(
    client: &Client,
    url: String,
    rules: &[ClassificationRule],
) -> LinkResult {
    // Reject malformed candidates before spending a network request.
    // reqwest would refuse them anyway, but parsing up front gives us a
    // clear message instead of a generic builder error.
    if let Err(e) = Url::parse(&url) {
        debug!(url = %url, "candidate is not a parseable URL");
        return LinkResult::transport_failure(url, format!("malformed URL: {}", e));
    }

    match client.head(&url).send().await {
        Ok(response) => classify_response(url, response.status().as_u16(), rules),
        Err(e) => categorize_error(url, e),
    }
}

// Applies the classification policy to a received status code
//
// Policy:
// - status < 400: Valid (2xx success, 3xx redirects we followed or accept)
// - status >= 400: Valid only if an exception rule covers this exact
//   (url, status) pair; otherwise Broken
fn classify_response(url: String, status: u16, rules: &[ClassificationRule]) -> LinkResult {
    if status < 400 {
        debug!(url = %url, status, "link is valid");
        return LinkResult::valid(url, status);
    }

    if let Some(rule) = find_accepting_rule(rules, &url, status) {
        debug!(url = %url, status, prefix = %rule.prefix, "exception rule accepted status");
        let mut result = LinkResult::valid(url, status);
        result.error = Some(format!(
            "status {} accepted by exception rule for prefix {}",
            status, rule.prefix
        ));
        return result;
    }

    debug!(url = %url, status, "link is broken");
    LinkResult::broken(url, status)
}

// Categorizes different transport failures from reqwest
//
// reqwest errors can happen for many reasons:
// - Request timeout
// - DNS resolution failure
// - Connection refused / host unreachable
// - TLS certificate problems
// - Redirect loops
fn categorize_error(url: String, error: reqwest::Error) -> LinkResult {
    let error_string = error.to_string();

    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            "could not resolve hostname".to_string()
        } else {
            format!("connection failed: {}", error_string)
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "TLS certificate error".to_string()
    } else {
        error_string
    };

    debug!(url = %url, error = %message, "transport failure");
    LinkResult::transport_failure(url, message)
}
