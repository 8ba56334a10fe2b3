// src/classifier/filter.rs
// =============================================================================
// This module is the synchronous pre-filter stage: it decides, without any
// network I/O, which candidates should never be probed at all.
//
// We skip a candidate when:
// - the anchor had no href attribute at all (candidate is None)
// - the href is empty
// - it is a mailto: address
// - it is a tel: phone number
//
// Everything else goes to dispatch, even if it looks malformed - a bad URL
// surfaces as a per-item Broken result there, not as a pre-filter decision.
//
// Rust concepts:
// - Option<&str>: "maybe a string slice" - models a possibly-missing href
// - Enums with a method: SkipReason knows its own human-readable text
// - Ordered rule table: the checks run top-down, like a tiny decision list
// =============================================================================

// Why a candidate was excluded before dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The anchor tag carried no href attribute
    MissingHref,
    /// The href attribute was present but empty
    EmptyHref,
    /// The href is an email address (mailto: scheme)
    MailtoScheme,
    /// The href is a phone number (tel: scheme)
    TelScheme,
}

impl SkipReason {
    /// Human-readable text for the LinkResult error field
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::MissingHref => "no href attribute configured for anchor tag",
            SkipReason::EmptyHref => "href attribute is empty",
            SkipReason::MailtoScheme => "email address detected (mailto: scheme)",
            SkipReason::TelScheme => "telephone number detected (tel: scheme)",
        }
    }
}

// Decides whether a candidate should be skipped
//
// Returns Some(reason) when the candidate must NOT be dispatched,
// or None when it should proceed to the HEAD check.
//
// The checks are an ordered list evaluated top-down; the first match wins.
pub fn skip_reason(candidate: Option<&str>) -> Option<SkipReason> {
    let url = candidate?;

    if url.is_empty() {
        return Some(SkipReason::EmptyHref);
    }
    if url.starts_with("mailto:") {
        return Some(SkipReason::MailtoScheme);
    }
    if url.starts_with("tel:") {
        return Some(SkipReason::TelScheme);
    }

    None
}

// Special case: a None candidate has its own reason
//
// skip_reason() can't produce it (the ? operator bails out on None),
// so the pipeline asks for it explicitly.
pub fn missing_href() -> SkipReason {
    SkipReason::MissingHref
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does the ? operator do on an Option?
//    - `let url = candidate?;` returns None from the whole function when
//      candidate is None, and unwraps the &str when it is Some
//    - It's the same early-return sugar you see with Result, but for Option
//
// 2. Why &'static str for describe()?
//    - The reason texts are string literals baked into the binary
//    - 'static means they live for the whole program, so no allocation
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_href_is_skipped() {
        assert_eq!(skip_reason(None), None); // skip_reason itself passes None through
        assert_eq!(missing_href(), SkipReason::MissingHref);
    }

    #[test]
    fn test_empty_href_is_skipped() {
        assert_eq!(skip_reason(Some("")), Some(SkipReason::EmptyHref));
    }

    #[test]
    fn test_mailto_and_tel_are_skipped() {
        assert_eq!(
            skip_reason(Some("mailto:support@example.com")),
            Some(SkipReason::MailtoScheme)
        );
        assert_eq!(skip_reason(Some("tel:+1-555-0100")), Some(SkipReason::TelScheme));
    }

    #[test]
    fn test_http_urls_pass_through() {
        assert_eq!(skip_reason(Some("https://example.com")), None);
        assert_eq!(skip_reason(Some("http://example.com/page")), None);
    }

    #[test]
    fn test_malformed_strings_still_pass_through() {
        // Not well-formed, but filtering is not the place to decide that -
        // dispatch will report it as Broken with a malformed-URL error
        assert_eq!(skip_reason(Some("ht!tp://nope")), None);
        assert_eq!(skip_reason(Some("just some text")), None);
    }
}
