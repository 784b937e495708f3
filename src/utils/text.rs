//! Text helpers for outbound message fields.

use crate::constants::limits::{ELLIPSIS, MAX_FIELD_LENGTH};

/// Truncate `text` to at most `max` characters.
///
/// Text within the budget is returned untouched. Longer text keeps its first
/// `max - 3` characters and ends with `...`, so the result is exactly `max`
/// characters long. Lengths are counted in Unicode scalar values.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    // A budget smaller than the marker still honors `max`.
    out.extend(ELLIPSIS.chars().take(max - keep));
    out
}

/// Truncate to the embed field budget.
pub fn short(text: &str) -> String {
    truncate(text, MAX_FIELD_LENGTH)
}

/// First line of a possibly multi-line message.
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate("fix bug", 1024), "fix bug");
        assert_eq!(truncate("", 10), "");
    }

    #[test]
    fn test_text_at_limit_is_untouched() {
        let text = "a".repeat(1024);
        assert_eq!(short(&text), text);
    }

    #[test]
    fn test_long_text_ends_with_marker() {
        let text = "b".repeat(1025);
        let out = short(&text);
        assert_eq!(out.chars().count(), 1024);
        assert!(out.ends_with("..."));
        assert!(out.starts_with("bbb"));
    }

    #[test]
    fn test_multibyte_text_counts_characters() {
        let text = "ü".repeat(20);
        let out = truncate(&text, 10);
        assert_eq!(out, format!("{}...", "ü".repeat(7)));
    }

    #[test]
    fn test_tiny_budget() {
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("subject\n\nbody"), "subject");
        assert_eq!(first_line("only"), "only");
        assert_eq!(first_line(""), "");
    }

    proptest! {
        #[test]
        fn prop_truncate_respects_budget(text in "\\PC{0,300}", max in 3usize..200) {
            let out = truncate(&text, max);
            let len = text.chars().count();
            if len <= max {
                prop_assert_eq!(out, text);
            } else {
                prop_assert_eq!(out.chars().count(), max);
                prop_assert!(out.ends_with("..."));
            }
        }
    }
}
