//! Text and date formatting for list rows and section headings

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

use crate::core::types::Tab;

/// Maximum title length shown in list rows before truncation.
pub const TITLE_LIMIT: usize = 75;

/// Rendered in place of a date that failed to parse. Display fallback only;
/// parse failures are not errors here.
pub const INVALID_DATE: &str = "Invalid Date";

const ELLIPSIS: char = '\u{2026}';

/// Parses the timestamp text the bridge emits.
///
/// Safari's history query emits `%Y-%m-%d %H:%M:%S`; RFC 3339 and bare dates
/// are accepted too since other scripts format differently.
fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();

    if let Ok(dt) = raw.parse::<DateTime<Utc>>() {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.and_local_timezone(Local).earliest();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .and_then(|dt| dt.and_local_timezone(Local).earliest());
    }

    None
}

/// Formats a timestamp as "Jan 5, 2024".
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || INVALID_DATE.to_string(),
        |dt| dt.format("%b %-d, %Y").to_string(),
    )
}

/// Formats a timestamp as a day heading, "Friday, January 5, 2024".
pub fn format_day_heading(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || INVALID_DATE.to_string(),
        |dt| dt.format("%A, %B %-d, %Y").to_string(),
    )
}

/// Display title for a tab, truncated for list rows.
pub fn get_title(tab: &Tab) -> String {
    truncate(&tab.title, TITLE_LIMIT)
}

/// Truncates `s` to at most `max_chars` characters, appending an ellipsis
/// when anything was cut. Counts characters, not bytes, so multi-byte titles
/// never split mid-character.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let mut out: String = s.chars().take(max_chars).collect();
    out.push(ELLIPSIS);
    out
}

/// `"{count} {word}"` with an `s` appended for counts above one.
///
/// Zero is singular on purpose; callers render "0 item" today and that
/// wording is kept.
pub fn plural(count: usize, word: &str) -> String {
    if count > 1 {
        format!("{count} {word}s")
    } else {
        format!("{count} {word}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tab_with_title(title: &str) -> Tab {
        Tab {
            window_id: 1,
            index: 0,
            title: title.to_string(),
            url: "https://example.com".to_string(),
            is_local: true,
        }
    }

    #[test]
    fn test_format_date_history_form() {
        assert_eq!(format_date("2024-01-05 14:30:00"), "Jan 5, 2024");
    }

    #[test]
    fn test_format_date_bare_date() {
        assert_eq!(format_date("2024-12-31"), "Dec 31, 2024");
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date("yesterday-ish"), INVALID_DATE);
        assert_eq!(format_date(""), INVALID_DATE);
    }

    #[test]
    fn test_day_heading() {
        assert_eq!(
            format_day_heading("2024-01-05 09:00:00"),
            "Friday, January 5, 2024"
        );
    }

    #[test]
    fn test_day_heading_invalid() {
        assert_eq!(format_day_heading("nope"), INVALID_DATE);
    }

    #[test]
    fn test_title_passthrough_when_short() {
        let tab = tab_with_title("Short title");
        assert_eq!(get_title(&tab), "Short title");
    }

    #[test]
    fn test_title_truncated_at_limit() {
        let long = "x".repeat(120);
        let tab = tab_with_title(&long);
        let title = get_title(&tab);
        assert_eq!(title.chars().count(), TITLE_LIMIT + 1);
        assert!(title.ends_with('\u{2026}'));
    }

    #[test]
    fn test_title_exact_limit_untouched() {
        let exact = "y".repeat(TITLE_LIMIT);
        let tab = tab_with_title(&exact);
        assert_eq!(get_title(&tab), exact);
    }

    #[test]
    fn test_truncate_multibyte() {
        let s = "é".repeat(80);
        let out = truncate(&s, 75);
        assert_eq!(out.chars().count(), 76);
        assert!(out.ends_with('\u{2026}'));
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "item"), "1 item");
        assert_eq!(plural(2, "item"), "2 items");
        assert_eq!(plural(0, "item"), "0 item");
    }

    proptest! {
        #[test]
        fn prop_truncate_never_exceeds_limit(s in ".*") {
            let out = truncate(&s, TITLE_LIMIT);
            prop_assert!(out.chars().count() <= TITLE_LIMIT + 1);
        }

        #[test]
        fn prop_plural_starts_with_count(count in 0usize..10_000) {
            prop_assert!(plural(count, "tab").starts_with(&count.to_string()));
        }
    }
}
