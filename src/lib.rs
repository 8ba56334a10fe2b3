// src/lib.rs
// =============================================================================
// This is the root of the link-triage library.
//
// What this crate does:
// 1. Takes a list of raw candidate URL strings (from a page crawler or sitemap)
// 2. Filters out things that should never be probed (mailto:, tel:, empty)
// 3. Issues HTTP HEAD requests with bounded concurrency
// 4. Classifies each URL as Valid, Broken, or Skipped
// 5. Aggregates everything into a Summary in original input order
//
// What this crate deliberately does NOT do:
// - No browser automation, no DOM extraction (collaborators supply the strings)
// - No CLI, no server, no persisted state (library only)
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this crate
// - async: Asynchronous code that can run concurrently
// =============================================================================

// Module declarations - tells Rust about our other source files
mod classifier;    // src/classifier/ - the filter/dispatch/aggregate pipeline
mod config;        // src/config.rs - timeouts and concurrency settings
mod error;         // src/error.rs - the typed error taxonomy
mod sitemap;       // src/sitemap.rs - <urlset><url><loc> extraction

// Re-export the public API at the crate root
// Users write `link_triage::LinkClassifier` instead of digging through modules
pub use classifier::{
    classify_links, ClassificationRule, LinkClassifier, LinkResult, LinkStatus, Summary,
};
pub use config::ClassifierConfig;
pub use error::{Result, TriageError};
pub use sitemap::parse_sitemap;
