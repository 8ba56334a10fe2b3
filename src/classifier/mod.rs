// src/classifier/mod.rs
// =============================================================================
// This module ties the whole pipeline together.
//
// Submodules:
// - filter: synchronous pre-filter (mailto:, tel:, empty, missing href)
// - rules: declarative exception rules for known site quirks
// - http: the per-URL HEAD probe and classification policy
// - summary: the LinkResult / Summary output types
//
// The LinkClassifier runs three stages:
// 1. Filter: mark skip-worthy candidates without any I/O
// 2. Dispatch: probe the survivors concurrently, bounded by the config
// 3. Aggregate: reassemble results in input order and derive the counts
//
// Rust concepts:
// - Streams: buffer_unordered runs up to N futures at once
// - Arc: shares the rule list with every concurrent task
// - Index correlation: each task carries its input position so completion
//   order doesn't matter
// =============================================================================

mod filter;
mod http;
mod rules;
mod summary;

// Re-export public items from submodules so users write
// `link_triage::Summary` instead of `link_triage::classifier::summary::Summary`
pub use rules::ClassificationRule;
pub use summary::{LinkResult, LinkStatus, Summary};

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use reqwest::Client;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, warn};

use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::sitemap;

// The concurrent link-status classifier
//
// One instance holds a connection-pooled HTTP client, the batch
// configuration, and the exception rules. Batches are independent:
// classify() carries no state from one call to the next.
pub struct LinkClassifier {
    client: Client,
    config: ClassifierConfig,
    rules: Vec<ClassificationRule>,
}

impl LinkClassifier {
    // Creates a classifier with the given configuration and no rules
    //
    // The client is built once and reused for every request in every batch
    // (connection pooling makes repeated probes to the same host cheap).
    pub fn new(config: ClassifierConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(reqwest::redirect::Policy::limited(5)) // Follow up to 5 redirects
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            rules: Vec::new(),
        }
    }

    /// Adds one exception rule; rules are evaluated in insertion order
    pub fn with_rule(mut self, rule: ClassificationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several exception rules at once
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = ClassificationRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    // Classifies a batch of candidates
    //
    // The input models what a DOM extractor yields: one entry per anchor
    // tag, None when the anchor had no href attribute at all. Duplicates
    // are allowed and each occurrence is classified independently.
    //
    // Always returns a Summary with exactly one result per candidate, in
    // input order - even when the batch timeout cuts the work short.
    pub async fn classify(&self, candidates: Vec<Option<String>>) -> Summary {
        let total = candidates.len();
        info!(total, concurrency = self.config.concurrency, "starting classification batch");

        // Stage 1: filter. Pre-allocate one slot per candidate so results
        // land at their input position no matter when they complete.
        let mut slots: Vec<Option<LinkResult>> = vec![None; total];
        let mut pending: Vec<(usize, String)> = Vec::new();

        for (index, candidate) in candidates.into_iter().enumerate() {
            let url = match candidate {
                None => {
                    let reason = filter::missing_href();
                    slots[index] =
                        Some(LinkResult::skipped(String::new(), reason.describe().to_string()));
                    continue;
                }
                Some(url) => url,
            };

            match filter::skip_reason(Some(url.as_str())) {
                Some(reason) => {
                    debug!(url = %url, reason = reason.describe(), "candidate skipped");
                    slots[index] = Some(LinkResult::skipped(url, reason.describe().to_string()));
                }
                None => pending.push((index, url)),
            }
        }

        debug!(
            dispatched = pending.len(),
            skipped = total - pending.len(),
            "filter stage complete"
        );

        // Stage 2: dispatch. Each future carries its input index; the rule
        // list is shared behind an Arc instead of being cloned per task.
        let rules = Arc::new(self.rules.clone());
        let probes: Vec<_> = pending
            .iter()
            .map(|(index, url)| {
                let client = self.client.clone(); // Cheap: Client is an Arc internally
                let rules = Arc::clone(&rules);
                let index = *index;
                let url = url.clone();
                async move {
                    let result = http::check_single_link(&client, url, &rules).await;
                    (index, result)
                }
            })
            .collect();

        // buffer_unordered(n) keeps at most n probes in flight and yields
        // results as they complete, in whatever order that happens
        let mut in_flight = stream::iter(probes).buffer_unordered(self.config.concurrency);

        let deadline = self.config.batch_timeout.map(|cap| Instant::now() + cap);

        loop {
            let next = match deadline {
                Some(deadline) => match timeout_at(deadline, in_flight.next()).await {
                    Ok(next) => next,
                    Err(_elapsed) => {
                        warn!("batch timeout reached, cancelling outstanding requests");
                        break;
                    }
                },
                None => in_flight.next().await,
            };

            match next {
                Some((index, result)) => slots[index] = Some(result),
                None => break, // Every probe has completed
            }
        }

        // Dropping the stream aborts in-flight requests (reqwest cancels on
        // drop) and guarantees queued probes are never started
        drop(in_flight);

        // Stage 3: aggregate. Back-fill the slots the timeout left empty,
        // then derive the counts from the partition so they can never
        // disagree with the result list.
        for (index, url) in &pending {
            if slots[*index].is_none() {
                slots[*index] = Some(LinkResult::transport_failure(
                    url.clone(),
                    "batch timeout exceeded before request completed".to_string(),
                ));
            }
        }

        let results: Vec<LinkResult> = slots
            .into_iter()
            .map(|slot| slot.expect("every candidate has exactly one result"))
            .collect();

        let summary = Summary::from_results(results);
        info!(
            valid = summary.valid_count,
            broken = summary.broken_count,
            skipped = summary.skipped_count,
            "classification batch complete"
        );
        summary
    }

    /// Convenience wrapper for callers whose candidate list has no missing
    /// entries (a sitemap, a deduplicated crawl frontier, ...)
    pub async fn classify_urls(&self, urls: Vec<String>) -> Summary {
        self.classify(urls.into_iter().map(Some).collect()).await
    }

    // The sitemap variant: parse raw XML, then classify the extracted URLs
    //
    // This is the one operation that can fail outright - malformed XML
    // leaves nothing to classify, so the error propagates instead of
    // becoming a per-URL result.
    pub async fn classify_sitemap(&self, xml: &str) -> Result<Summary> {
        let urls = sitemap::parse_sitemap(xml)?;
        Ok(self.classify_urls(urls).await)
    }
}

// Classifies a batch with the default configuration and the built-in
// LinkedIn exception rule
//
// This matches the out-of-the-box behavior most callers want: 30 second
// timeouts, 10 concurrent probes, and LinkedIn's HEAD quirk tolerated.
pub async fn classify_links(candidates: Vec<Option<String>>) -> Summary {
    LinkClassifier::new(ClassifierConfig::default())
        .with_rule(ClassificationRule::linkedin_head_quirk())
        .classify(candidates)
        .await
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why pre-allocated slots instead of sorting afterwards?
//    - Completion order is scrambled by buffer_unordered
//    - Writing each result at slots[index] restores input order for free
//    - The alternative (collect (index, result) pairs, then sort) works too
//      but does extra work at the end
//
// 2. Why is dropping the stream enough to cancel work?
//    - Rust futures do nothing unless polled
//    - Dropping the stream drops the in-flight futures, which drops their
//      reqwest requests, which aborts the underlying connections
//    - Queued futures were never polled, so they never even start
//
// 3. Why derive the counts from the result list?
//    - Concurrent tasks could share atomic counters instead, but then the
//      counters and the list could disagree around a batch timeout
//    - A reduction over the finished list makes the invariant
//      valid + broken + skipped == total true by construction
// -----------------------------------------------------------------------------
