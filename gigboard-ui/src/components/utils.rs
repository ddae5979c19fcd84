//! Utility functions for UI components

use chrono::{DateTime, Utc};

/// Truncate a title for display, appending an ellipsis when it was
/// actually shortened. Counts chars, not bytes, so multi-byte titles
/// are safe.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let cut: String = title.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Format a price in cents as dollars, e.g. 1250 -> "$12.50"
pub fn format_price(price_cents: i64) -> String {
    let sign = if price_cents < 0 { "-" } else { "" };
    let cents = price_cents.abs();
    format!("{}${}.{:02}", sign, cents / 100, cents % 100)
}

/// Format a timestamp for table display, e.g. "Mar 4, 2026"
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn short_title_unchanged() {
        assert_eq!(truncate_title("Logo Design", 60), "Logo Design");
    }

    #[test]
    fn long_title_truncated_with_ellipsis() {
        let title = "a".repeat(80);
        let truncated = truncate_title(&title, 60);
        assert_eq!(truncated.chars().count(), 60);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let title = "é".repeat(10);
        assert_eq!(truncate_title(&title, 10), title);
        let truncated = truncate_title(&title, 5);
        assert_eq!(truncated.chars().count(), 5);
    }

    #[test]
    fn exact_length_title_unchanged() {
        let title = "a".repeat(60);
        assert_eq!(truncate_title(&title, 60), title);
    }

    #[test]
    fn price_formatting() {
        assert_eq!(format_price(1250), "$12.50");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(0), "$0.00");
        assert_eq!(format_price(-995), "-$9.95");
    }

    #[test]
    fn date_formatting() {
        let ts = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();
        assert_eq!(format_date(&ts), "Mar 4, 2026");
    }
}
