// src/config.rs
// =============================================================================
// This file holds the configuration for a classification batch.
//
// The knobs:
// - connect_timeout / request_timeout: per-request limits (default 30s each)
// - concurrency: how many HEAD requests may be in flight at once (default 10)
// - batch_timeout: optional cap on how long a whole batch may take
//
// Rust concepts:
// - Duration: std's type for spans of time
// - Default trait: gives a type a canonical "zero-config" value
// - Builder-style methods: `config.with_concurrency(4)` chains nicely
// =============================================================================

use std::time::Duration;

// Configuration for a LinkClassifier
//
// Construct with ClassifierConfig::default() and override what you need:
//
//   let config = ClassifierConfig::default()
//       .with_concurrency(4)
//       .with_batch_timeout(Duration::from_secs(60));
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Maximum time to establish a connection for one request
    pub connect_timeout: Duration,
    /// Maximum time for one request to complete (headers received)
    pub request_timeout: Duration,
    /// Maximum number of HEAD requests in flight at once
    ///
    /// 1 means strictly sequential checking; larger values pool the work.
    pub concurrency: usize,
    /// Optional cap on how long the whole batch may run
    ///
    /// None means "wait until every request finishes or times out on its own".
    /// When the cap is hit, in-flight requests are cancelled and their slots
    /// are reported as Broken with a timeout message.
    pub batch_timeout: Option<Duration>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            // 30 seconds matches the classic production default for
            // connect and response timeouts on link probes
            connect_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(30),
            concurrency: 10,
            batch_timeout: None,
        }
    }
}

impl ClassifierConfig {
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        // A concurrency of 0 would deadlock buffer_unordered, so clamp to 1
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_batch_timeout(mut self, timeout: Duration) -> Self {
        self.batch_timeout = Some(timeout);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_documented_values() {
        let config = ClassifierConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.concurrency, 10);
        assert!(config.batch_timeout.is_none());
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let config = ClassifierConfig::default().with_concurrency(0);
        assert_eq!(config.concurrency, 1);
    }
}
