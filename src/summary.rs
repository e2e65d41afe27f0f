//! Normalization of the summarizer's reply into a filename-safe token.

use crate::constants::{MAX_SUMMARY_INPUT_BYTES, SUMMARY_WORD_LIMIT};

/// Turns a raw summary into a filename token: the first five whitespace-split
/// words, hyphen-joined, with `.` and `,` stripped.
pub fn summary_token(raw: &str) -> String {
    let joined = raw
        .split_whitespace()
        .take(SUMMARY_WORD_LIMIT)
        .collect::<Vec<_>>()
        .join("-");
    joined.trim().replace(['.', ','], "")
}

/// Cuts the body text down to what we send the summarizer, on a char boundary.
pub fn truncate_for_context(body: &str) -> &str {
    if body.len() <= MAX_SUMMARY_INPUT_BYTES {
        return body;
    }
    let mut end = MAX_SUMMARY_INPUT_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_keeps_first_five_words() {
        assert_eq!(
            summary_token("The Quick Brown Fox Jumps over the lazy dog"),
            "The-Quick-Brown-Fox-Jumps"
        );
    }

    #[test]
    fn test_token_short_summary_not_padded() {
        assert_eq!(summary_token("Tea ceremony history"), "Tea-ceremony-history");
    }

    #[test]
    fn test_token_strips_periods_and_commas() {
        assert_eq!(
            summary_token("Fox, hound, and the hunt."),
            "Fox-hound-and-the-hunt"
        );
    }

    #[test]
    fn test_token_collapses_whitespace() {
        assert_eq!(summary_token("  one\t two \n three  "), "one-two-three");
    }

    #[test]
    fn test_truncate_short_body_untouched() {
        assert_eq!(truncate_for_context("short"), "short");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        let body = "é".repeat(MAX_SUMMARY_INPUT_BYTES);
        let cut = truncate_for_context(&body);
        assert!(cut.len() <= MAX_SUMMARY_INPUT_BYTES);
        assert!(body.starts_with(cut));
    }
}
