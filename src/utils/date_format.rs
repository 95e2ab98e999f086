use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};

/// Supported date format options for table output
#[derive(Debug, Clone, PartialEq)]
pub enum DateFormat {
    Medium,       // Feb 27, 2025 (dashboard default)
    YearMonthDay, // yyyy-mm-dd (ISO)
    DayMonthYear, // dd-mm-yyyy (European)
    MonthDayYear, // mm-dd-yyyy (American)
}

impl DateFormat {
    /// Parse a date format string from config
    pub fn from_config_str(format_str: &str) -> Result<Self> {
        match format_str.to_lowercase().as_str() {
            "medium" => Ok(DateFormat::Medium),
            "yyyy-mm-dd" => Ok(DateFormat::YearMonthDay),
            "dd-mm-yyyy" => Ok(DateFormat::DayMonthYear),
            "mm-dd-yyyy" => Ok(DateFormat::MonthDayYear),
            _ => Err(anyhow!(
                "Invalid date format '{}'. Supported formats: medium, yyyy-mm-dd, dd-mm-yyyy, mm-dd-yyyy",
                format_str
            )),
        }
    }

    /// Get the chrono format string for this date format
    pub fn to_chrono_format(&self) -> &'static str {
        match self {
            DateFormat::Medium => "%b %-d, %Y",
            DateFormat::YearMonthDay => "%Y-%m-%d",
            DateFormat::DayMonthYear => "%d-%m-%Y",
            DateFormat::MonthDayYear => "%m-%d-%Y",
        }
    }

    /// Format a NaiveDate for table display
    pub fn format_naive_date(&self, date: &NaiveDate) -> String {
        date.format(self.to_chrono_format()).to_string()
    }
}

/// Utility struct for formatting dates according to configuration
#[derive(Debug, Clone)]
pub struct DateFormatter {
    table_format: DateFormat,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self {
            table_format: DateFormat::Medium,
        }
    }
}

impl DateFormatter {
    /// Create a new DateFormatter from config string
    pub fn new(config_format: &str) -> Result<Self> {
        let table_format = DateFormat::from_config_str(config_format)?;
        Ok(Self { table_format })
    }

    /// Format a NaiveDate for table output
    pub fn format_naive_date_for_table(&self, date: &NaiveDate) -> String {
        self.table_format.format_naive_date(date)
    }

    /// Format a NaiveDate for JSON output (always ISO)
    pub fn format_naive_date_for_json(&self, date: &NaiveDate) -> String {
        // JSON output always uses ISO format regardless of config
        date.format("%Y-%m-%d").to_string()
    }
}

/// Parse an upstream timestamp. The metrics source emits RFC 2822 strings
/// ("Thu, 27 Feb 2025 16:12:03 GMT"); RFC 3339 is accepted as well.
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            DateTime::parse_from_rfc3339(timestamp).map(|dt| dt.with_timezone(&Utc))
        })
        .or_else(|_| {
            DateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f%z")
                .map(|dt| dt.with_timezone(&Utc))
        })
        .map_err(|_| anyhow!("Failed to parse timestamp: {timestamp}"))
}

/// Parse an upstream timestamp down to its calendar day.
pub fn parse_day(timestamp: &str) -> Result<NaiveDate> {
    Ok(parse_timestamp(timestamp)?.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_date_format_from_config() {
        assert_eq!(
            DateFormat::from_config_str("medium").unwrap(),
            DateFormat::Medium
        );
        assert_eq!(
            DateFormat::from_config_str("yyyy-mm-dd").unwrap(),
            DateFormat::YearMonthDay
        );
        assert_eq!(
            DateFormat::from_config_str("dd-mm-yyyy").unwrap(),
            DateFormat::DayMonthYear
        );

        // Case insensitive
        assert_eq!(
            DateFormat::from_config_str("MEDIUM").unwrap(),
            DateFormat::Medium
        );

        // Invalid format
        assert!(DateFormat::from_config_str("invalid").is_err());
    }

    #[test]
    fn test_naive_date_formatting() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 27).unwrap();

        assert_eq!(DateFormat::Medium.format_naive_date(&date), "Feb 27, 2025");
        assert_eq!(
            DateFormat::YearMonthDay.format_naive_date(&date),
            "2025-02-27"
        );
        assert_eq!(
            DateFormat::DayMonthYear.format_naive_date(&date),
            "27-02-2025"
        );
        assert_eq!(
            DateFormat::MonthDayYear.format_naive_date(&date),
            "02-27-2025"
        );
    }

    #[test]
    fn test_parse_timestamp_rfc2822_and_rfc3339() {
        let from_2822 = parse_timestamp("Thu, 27 Feb 2025 16:12:03 GMT").unwrap();
        let from_3339 = parse_timestamp("2025-02-27T16:12:03Z").unwrap();
        assert_eq!(from_2822, from_3339);

        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_parse_day() {
        let day = parse_day("Thu, 27 Feb 2025 16:12:03 GMT").unwrap();
        assert_eq!(day, NaiveDate::from_ymd_opt(2025, 2, 27).unwrap());
    }

    #[test]
    fn test_json_dates_always_iso() {
        let formatter = DateFormatter::new("dd-mm-yyyy").unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 2, 27).unwrap();
        assert_eq!(formatter.format_naive_date_for_table(&date), "27-02-2025");
        assert_eq!(formatter.format_naive_date_for_json(&date), "2025-02-27");
    }
}
