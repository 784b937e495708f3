//! Compact duration expressions such as `1h30m` or `45s`.

use once_cell::sync::Lazy;
use regex::Regex;

static DURATION_TERM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)([hms])").expect("duration pattern is valid"));

/// Sum every `<number><h|m|s>` term in `expr`, in seconds.
///
/// Text that matches no term counts as zero; other characters between terms
/// are ignored.
pub fn duration_seconds(expr: &str) -> u64 {
    DURATION_TERM
        .captures_iter(expr)
        .filter_map(|caps| {
            let amount: u64 = caps[1].parse().ok()?;
            let unit = match &caps[2] {
                "h" => 3600,
                "m" => 60,
                _ => 1,
            };
            amount.checked_mul(unit)
        })
        .fold(0u64, u64::saturating_add)
}
