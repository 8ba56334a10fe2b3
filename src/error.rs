// src/error.rs
// =============================================================================
// This file defines the error taxonomy for the crate.
//
// Important design point: almost nothing in this crate is a fatal error!
// - A mailto: link is a Skipped result, not an error
// - A DNS failure or 404 is a Broken result, not an error
// - A batch timeout still yields a full Summary
//
// The ONE fatal case is sitemap parsing: without a URL list there is
// nothing to classify, so malformed XML aborts that batch invocation.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: auto-implements From<...> so `?` converts errors for us
// - Type alias: `Result<T>` saves typing the error type everywhere
// =============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    /// The sitemap document is not well-formed XML
    #[error("sitemap XML is not well-formed: {0}")]
    SitemapParse(#[from] roxmltree::Error),

    /// The sitemap parsed as XML but is missing the expected structure
    /// (for example, the root element is not <urlset>)
    #[error("sitemap is missing expected structure: {0}")]
    SitemapStructure(String),
}

/// Crate-local Result alias so signatures stay short
pub type Result<T> = std::result::Result<T, TriageError>;

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why so few variants?
//    - Per-URL failures are data (a Broken LinkResult), not control flow
//    - Only failures that leave us with nothing to report become errors
//
// 2. What does #[from] do?
//    - It generates `impl From<roxmltree::Error> for TriageError`
//    - That lets us write `roxmltree::Document::parse(xml)?` and have the
//      parser's error converted into our variant automatically
// -----------------------------------------------------------------------------
