// src/sitemap.rs
// =============================================================================
// This module extracts URLs from a sitemap document.
//
// A sitemap is an XML file listing a site's canonical URLs:
//
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url><loc>https://example.com/</loc></url>
//     <url><loc>https://example.com/about</loc></url>
//   </urlset>
//
// We use the `roxmltree` crate which:
// - Parses the whole document up front (read-only DOM)
// - Reports malformed XML as a proper error, which is part of our contract
// - Exposes namespace-aware tag names (sitemaps carry an xmlns)
//
// Error policy (deliberate, see DESIGN.md):
// - Malformed XML or a root element other than <urlset>: fatal, the whole
//   batch invocation fails - without a URL list there is nothing to classify
// - A <url> entry missing its <loc> child: skipped with a warning - the
//   loss is attributable to one entry, the rest of the list is fine
//
// Rust concepts:
// - Result + ?: the parser error converts into TriageError via #[from]
// - Iterator chains over the DOM tree
// =============================================================================

use tracing::{debug, warn};

use crate::error::{Result, TriageError};

// Extracts all <url><loc> values from sitemap XML, in document order
//
// Parameters:
//   xml: the raw sitemap text (the fetcher collaborator supplies it)
//
// Returns: the ordered URL list, or a fatal error when the document itself
// is unusable
pub fn parse_sitemap(xml: &str) -> Result<Vec<String>> {
    // This is where malformed XML surfaces: Document::parse validates
    // well-formedness and ? converts its error into TriageError::SitemapParse
    let document = roxmltree::Document::parse(xml)?;

    let root = document.root_element();
    // Compare the local name only: sitemaps declare the sitemaps.org
    // namespace, and we don't care whether a prefix was used
    if root.tag_name().name() != "urlset" {
        return Err(TriageError::SitemapStructure(format!(
            "expected <urlset> root element, found <{}>",
            root.tag_name().name()
        )));
    }

    let mut urls = Vec::new();

    for entry in root.children().filter(|n| n.tag_name().name() == "url") {
        let loc = entry
            .children()
            .find(|n| n.tag_name().name() == "loc")
            .and_then(|n| n.text())
            .map(str::trim)
            .filter(|text| !text.is_empty());

        match loc {
            Some(url) => urls.push(url.to_string()),
            None => warn!("sitemap <url> entry has no <loc> value, skipping entry"),
        }
    }

    debug!(count = urls.len(), "extracted URLs from sitemap");
    Ok(urls)
}
