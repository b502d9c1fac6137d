use std::collections::BTreeMap;

use anyhow::{Context, Result};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::model::counts_by_frequency;

/// Legend labels are cut to this many chars.
pub const LEGEND_LABEL_MAX: usize = 15;

pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let head: String = label.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

pub fn share(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

pub fn format_percent(part: u64, total: u64) -> String {
    format!("{:.2}%", share(part, total) * 100.0)
}

/// "Python:2, JavaScript:1, other:3" with at most `max_langs` named entries.
pub fn format_language_counts(counts: &BTreeMap<String, u64>, max_langs: usize) -> String {
    let ranked = counts_by_frequency(counts);
    let tail: u64 = ranked.iter().skip(max_langs).map(|(_, n)| n).sum();

    let mut parts: Vec<String> = ranked
        .iter()
        .take(max_langs)
        .map(|(lang, n)| format!("{}:{}", lang, n))
        .collect();
    if tail > 0 {
        parts.push(format!("other:{}", tail));
    }
    parts.join(", ")
}

pub fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// `2024-03-01 09:05:07 UTC`
pub fn format_timestamp(ts: OffsetDateTime) -> Result<String> {
    let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    ts.to_offset(UtcOffset::UTC)
        .format(&fmt)
        .context("Failed to format timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_are_untouched() {
        assert_eq!(truncate_label("sqli", LEGEND_LABEL_MAX), "sqli");
        assert_eq!(truncate_label("exactly-15-char", 15), "exactly-15-char");
    }

    #[test]
    fn long_labels_get_ellipsis() {
        assert_eq!(
            truncate_label("server-side-template-injection", LEGEND_LABEL_MAX),
            "server-side-tem..."
        );
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        assert_eq!(truncate_label("ééééé", 3), "ééé...");
    }

    #[test]
    fn percent_of_zero_total_is_zero() {
        assert_eq!(format_percent(3, 0), "0.00%");
        assert_eq!(format_percent(1, 3), "33.33%");
        assert_eq!(format_percent(4, 4), "100.00%");
    }

    #[test]
    fn language_counts_roll_up_the_tail() {
        let mut m = BTreeMap::new();
        m.insert("Python".to_string(), 5);
        m.insert("Go".to_string(), 1);
        m.insert("PHP".to_string(), 3);
        m.insert("C".to_string(), 1);

        assert_eq!(format_language_counts(&m, 2), "Python:5, PHP:3, other:2");
        assert_eq!(format_language_counts(&m, 10), "Python:5, PHP:3, C:1, Go:1");
        assert_eq!(format_language_counts(&BTreeMap::new(), 3), "");
    }

    #[test]
    fn case_insensitive_filter() {
        assert!(contains_case_insensitive("sqli/Login.PHP", "login.php"));
        assert!(contains_case_insensitive("anything", ""));
        assert!(!contains_case_insensitive("xss/a.js", "sqli"));
    }

    #[test]
    fn language_counts_use_report_ordering() {
        let mut m = BTreeMap::new();
        m.insert("PHP".to_string(), 2);
        m.insert("Go".to_string(), 2);
        m.insert("Python".to_string(), 1);

        // equal counts fall back to label order, as in the charts
        assert_eq!(format_language_counts(&m, 1), "Go:2, other:3");
    }

    #[test]
    fn timestamp_is_normalized_to_utc() {
        let ts = OffsetDateTime::from_unix_timestamp(1_709_283_907)
            .unwrap()
            .to_offset(UtcOffset::from_hms(5, 30, 0).unwrap());
        assert_eq!(format_timestamp(ts).unwrap(), "2024-03-01 09:05:07 UTC");
    }

    #[test]
    fn timestamp_is_utc() {
        let ts = OffsetDateTime::from_unix_timestamp(1_709_283_907).unwrap();
        assert_eq!(format_timestamp(ts).unwrap(), "2024-03-01 09:05:07 UTC");
    }
}
