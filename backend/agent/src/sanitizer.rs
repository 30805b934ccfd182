//! Incremental response sanitizer.
//!
//! Backends that reason out loud wrap their deliberation in an inline tag
//! pair (`<think>...</think>` for the models we target). The tags arrive as
//! part of the normal text stream and may be split anywhere across fragment
//! boundaries, so instead of tracking partial-tag parse state the sanitizer
//! re-derives its output from the entire accumulated raw text on every
//! arrival. Message sizes are conversational, so the quadratic aggregate
//! cost is irrelevant next to never mis-detecting a split tag.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default tag name used by the upstream models.
pub const DEFAULT_REASONING_TAG: &str = "think";

static DEFAULT_SANITIZER: Lazy<ResponseSanitizer> =
    Lazy::new(|| ResponseSanitizer::new(DEFAULT_REASONING_TAG));

/// Strips hidden-reasoning markup from accumulated raw response text.
pub struct ResponseSanitizer {
    complete_block: Regex,
    open_tail: Regex,
    orphan_close: Regex,
}

impl ResponseSanitizer {
    /// Build a sanitizer for the given tag name (case-insensitive).
    pub fn new(tag: &str) -> Self {
        let tag = regex::escape(tag);
        Self {
            complete_block: Regex::new(&format!(r"(?is)<{tag}>.*?</{tag}>")).unwrap(),
            open_tail: Regex::new(&format!(r"(?is)<{tag}>.*$")).unwrap(),
            orphan_close: Regex::new(&format!(r"(?i)</{tag}>")).unwrap(),
        }
    }

    /// Produce the displayable text for the raw text received so far.
    ///
    /// Applied in this order:
    /// 1. drop every complete `<tag>...</tag>` block (non-greedy, spans newlines);
    /// 2. drop a remaining unmatched open tag and everything after it, so
    ///    in-progress reasoning stays hidden while it streams;
    /// 3. drop orphan close tags without touching surrounding content;
    /// 4. trim the ends.
    ///
    /// Output may shrink between successive calls on a growing buffer: once
    /// an open tag appears, rule 2 retracts text that was previously visible.
    pub fn sanitize(&self, raw: &str) -> String {
        let cleaned = self.complete_block.replace_all(raw, "");
        let cleaned = self.open_tail.replace_all(&cleaned, "");
        let cleaned = self.orphan_close.replace_all(&cleaned, "");
        cleaned.trim().to_string()
    }
}

impl Default for ResponseSanitizer {
    fn default() -> Self {
        Self::new(DEFAULT_REASONING_TAG)
    }
}

/// Sanitize with the default tag.
pub fn sanitize(raw: &str) -> String {
    DEFAULT_SANITIZER.sanitize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn plain_text_passes_through_trimmed() {
        assert_eq!(sanitize("  Hello world \n"), "Hello world");
    }

    #[test]
    fn removes_complete_block_keeping_surrounding_text() {
        // Tag and content go; the surrounding text is untouched, so the
        // doubled space survives everywhere but the ends.
        assert_eq!(
            sanitize("Hello <think>hidden</think> world"),
            "Hello  world"
        );
    }

    #[test]
    fn removes_multiple_blocks() {
        assert_eq!(
            sanitize("<think>a</think>one<think>b</think>two"),
            "onetwo"
        );
    }

    #[test]
    fn block_spans_newlines() {
        assert_eq!(
            sanitize("Hi<think>line one\nline two\n</think> there"),
            "Hi there"
        );
    }

    #[test]
    fn tags_are_case_insensitive() {
        assert_eq!(sanitize("Hello <THINK>x</Think> world"), "Hello  world");
    }

    #[test]
    fn unmatched_open_hides_everything_after_it() {
        assert_eq!(sanitize("Hello <think>still thinking"), "Hello");
    }

    #[test]
    fn partial_open_tag_is_not_yet_detected() {
        // Mid-stream the buffer can end inside the tag itself; it only
        // disappears once enough raw text has arrived.
        assert_eq!(sanitize("Hello <thi"), "Hello <thi");
        assert_eq!(sanitize("Hello <think"), "Hello <think");
        assert_eq!(sanitize("Hello <think>"), "Hello");
    }

    #[test]
    fn orphan_close_removed_without_surrounding_content() {
        assert_eq!(sanitize("Hello</think> world"), "Hello world");
    }

    #[test]
    fn fully_reasoning_response_is_empty() {
        assert_eq!(sanitize("<think>all hidden</think>"), "");
        assert_eq!(sanitize("<think>never closed"), "");
    }

    #[test]
    fn sanitizer_is_idempotent() {
        let inputs = [
            "Hello <think>hidden</think> world",
            "Hello <think>still thinking",
            "Hello</think> world",
            "plain",
            "",
            "<think>a</think><think>b",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn custom_tag_name() {
        let sanitizer = ResponseSanitizer::new("reasoning");
        assert_eq!(
            sanitizer.sanitize("Hello <reasoning>hidden</reasoning> world"),
            "Hello  world"
        );
        assert_eq!(sanitizer.sanitize("Hello <reasoning>still thinking"), "Hello");
        assert_eq!(sanitizer.sanitize("Hello</reasoning> world"), "Hello world");
    }

    #[test]
    fn output_rederived_from_growing_buffer_can_shrink() {
        let mut raw = String::from("Sure");
        assert_eq!(sanitize(&raw), "Sure");
        raw.push_str(" <think>hm");
        // The open tag retracts previously visible text.
        assert_eq!(sanitize(&raw), "Sure");
        raw.push_str("</think> thing");
        assert_eq!(sanitize(&raw), "Sure  thing");
    }
}
