use crate::utils::date_format::parse_timestamp;
use thiserror::Error;

/// Default truncation length for identifiers and free-form labels.
pub const DEFAULT_LABEL_LEN: usize = 20;

/// Prefix length kept by [`abbreviate_id`].
pub const ID_PREFIX_LEN: usize = 8;

const ELLIPSIS: &str = "...";

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("unparsable timestamp '{0}'")]
    InvalidTimestamp(String),
}

/// Format a number with commas for thousands separator.
pub fn format_integer(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut result = String::new();
    let s = n.to_string();
    let chars: Vec<char> = s.chars().collect();

    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }

    result
}

/// Render a fraction in [0,1] as a percentage with exactly one fractional
/// digit. Values outside [0,1] are not clamped; the caller's division is
/// expected to have validated the denominator already.
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Abbreviate a large number with a K/M/B/T suffix and at most one
/// fractional digit, rounding half away from zero.
pub fn format_compact(n: f64) -> String {
    let (value, suffix) = if n.abs() >= 1e12 {
        (n / 1e12, "T")
    } else if n.abs() >= 1e9 {
        (n / 1e9, "B")
    } else if n.abs() >= 1e6 {
        (n / 1e6, "M")
    } else if n.abs() >= 1e3 {
        (n / 1e3, "K")
    } else {
        (n, "")
    };

    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}{}", rounded as i64, suffix)
    } else {
        format!("{rounded:.1}{suffix}")
    }
}

/// Format a timestamp string as a readable date, e.g. "Feb 27, 2025".
pub fn format_date(timestamp: &str) -> Result<String, FormatError> {
    let dt = parse_timestamp(timestamp)
        .map_err(|_| FormatError::InvalidTimestamp(timestamp.to_string()))?;
    Ok(dt.format("%b %-d, %Y").to_string())
}

/// Format a timestamp string as a 12-hour clock time, e.g. "4:12 PM".
pub fn format_time(timestamp: &str) -> Result<String, FormatError> {
    let dt = parse_timestamp(timestamp)
        .map_err(|_| FormatError::InvalidTimestamp(timestamp.to_string()))?;
    Ok(dt.format("%-I:%M %p").to_string())
}

/// Truncate a label to `max_len` characters, appending an ellipsis marker.
/// Strings at or under the limit come back unchanged. Counting is by chars,
/// not bytes, so multi-byte labels never split inside a code point.
pub fn truncate_label(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let mut truncated: String = s.chars().take(max_len).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Abbreviate a UUID-like identifier to its first 8 characters. An empty
/// input yields an empty string, not an error.
pub fn abbreviate_id(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }
    let mut prefix: String = id.chars().take(ID_PREFIX_LEN).collect();
    prefix.push_str(ELLIPSIS);
    prefix
}

/// Convert seconds to a human-readable duration, e.g. "1.3s" or "2m 5s".
pub fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        return format!("{seconds:.1}s");
    }
    let minutes = (seconds / 60.0).floor() as u64;
    let remaining = seconds % 60.0;
    format!("{minutes}m {remaining:.0}s")
}

/// Convert camelCase to Title Case with spaces, e.g. "totalUsers" ->
/// "Total Users".
pub fn camel_to_title_case(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len() + 4);
    for ch in s.chars() {
        if ch.is_ascii_uppercase() && !spaced.is_empty() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integer() {
        assert_eq!(format_integer(0), "0");
        assert_eq!(format_integer(123), "123");
        assert_eq!(format_integer(1234), "1,234");
        assert_eq!(format_integer(695009), "695,009");
        assert_eq!(format_integer(1234567890), "1,234,567,890");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.296), "29.6%");
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(1.0), "100.0%");
        assert_eq!(format_percentage(0.671), "67.1%");
    }

    #[test]
    fn test_format_percentage_does_not_clamp() {
        assert_eq!(format_percentage(1.5), "150.0%");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(486.0), "486");
        assert_eq!(format_compact(1234.0), "1.2K");
        assert_eq!(format_compact(695009.0), "695K");
        assert_eq!(format_compact(1_500_000.0), "1.5M");
        assert_eq!(format_compact(2_000_000_000.0), "2B");
        assert_eq!(format_compact(3_400_000_000_000.0), "3.4T");
    }

    #[test]
    fn test_format_compact_rounds_rather_than_truncates() {
        // 1250 / 1000 = 1.25, rounded half away from zero
        assert_eq!(format_compact(1250.0), "1.3K");
        assert_eq!(format_compact(1949.0), "1.9K");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date("Thu, 27 Feb 2025 00:00:00 GMT").unwrap(),
            "Feb 27, 2025"
        );
        assert_eq!(format_date("2025-02-27T16:12:03Z").unwrap(), "Feb 27, 2025");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(
            format_time("Thu, 27 Feb 2025 16:12:03 GMT").unwrap(),
            "4:12 PM"
        );
        assert_eq!(format_time("2025-02-27T09:05:00Z").unwrap(), "9:05 AM");
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        let err = format_date("not-a-date").unwrap_err();
        assert_eq!(err, FormatError::InvalidTimestamp("not-a-date".to_string()));
        assert!(format_time("").is_err());
    }

    #[test]
    fn test_truncate_label_boundary() {
        // exactly at the limit: unchanged
        let twenty = "exactly-twenty-chars";
        assert_eq!(twenty.len(), 20);
        assert_eq!(truncate_label(twenty, 20), twenty);

        // one over: first 20 chars plus ellipsis
        let twenty_one = "this-is-twenty-one-ch";
        assert_eq!(twenty_one.len(), 21);
        assert_eq!(truncate_label(twenty_one, 20), "this-is-twenty-one-c...");
    }

    #[test]
    fn test_truncate_label_idempotent() {
        let long = "a-label-much-longer-than-the-limit";
        let once = truncate_label(long, 15);
        let twice = truncate_label(&once, 15);
        assert_eq!(once, twice);

        let short = "short";
        assert_eq!(
            truncate_label(&truncate_label(short, 15), 15),
            truncate_label(short, 15)
        );
    }

    #[test]
    fn test_truncate_label_counts_chars_not_bytes() {
        let label = "ünïcödé-läbel-wïth-äccents";
        let truncated = truncate_label(label, 10);
        assert_eq!(truncated, "ünïcödé-lä...");
    }

    #[test]
    fn test_abbreviate_id() {
        assert_eq!(
            abbreviate_id("0414b579-3bc3-4c7b-986d-9250fae68bdc"),
            "0414b579..."
        );
        assert_eq!(abbreviate_id(""), "");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1.292), "1.3s");
        assert_eq!(format_duration(59.94), "59.9s");
        assert_eq!(format_duration(125.0), "2m 5s");
        assert_eq!(format_duration(60.0), "1m 0s");
    }

    #[test]
    fn test_camel_to_title_case() {
        assert_eq!(camel_to_title_case("totalUsers"), "Total Users");
        assert_eq!(camel_to_title_case("likeRatio"), "Like Ratio");
        assert_eq!(camel_to_title_case("messages"), "Messages");
        assert_eq!(camel_to_title_case(""), "");
    }
}
