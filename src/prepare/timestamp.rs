//! 生CSVの日時パース
//!
//! 通常は `YYYY-MM-DD HH:MM:SS`。`24:MM:SS` は翌日の `00:MM:SS` として扱う。

use chrono::{Duration, NaiveDate, NaiveDateTime};
use regex::Regex;

/// 出力JSONの日時フォーマット
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const RAW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 生CSVの日時をパース
pub fn parse_raw_timestamp(value: &str) -> Option<NaiveDateTime> {
    let s = value.trim();

    lazy_static::lazy_static! {
        static ref HOUR_24_RE: Regex =
            Regex::new(r"^(\d{4}-\d{2}-\d{2})\s+24:(\d{2}):(\d{2})$").unwrap();
    }

    if let Some(caps) = HOUR_24_RE.captures(s) {
        let day = NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()?;
        let minutes: i64 = caps[2].parse().ok()?;
        let seconds: i64 = caps[3].parse().ok()?;
        let midnight = day.and_hms_opt(0, 0, 0)?;
        return Some(
            midnight + Duration::hours(24) + Duration::minutes(minutes) + Duration::seconds(seconds),
        );
    }

    NaiveDateTime::parse_from_str(s, RAW_FORMAT).ok()
}

/// 出力用のISO形式
pub fn to_iso(dt: &NaiveDateTime) -> String {
    dt.format(ISO_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normal() {
        let dt = parse_raw_timestamp("2024-01-01 10:05:30").unwrap();
        assert_eq!(to_iso(&dt), "2024-01-01T10:05:30");
    }

    #[test]
    fn test_parse_hour_24_rolls_over() {
        let dt = parse_raw_timestamp("2024-01-31 24:10:05").unwrap();
        assert_eq!(to_iso(&dt), "2024-02-01T00:10:05");
    }

    #[test]
    fn test_parse_hour_24_year_end() {
        let dt = parse_raw_timestamp("2023-12-31 24:00:00").unwrap();
        assert_eq!(to_iso(&dt), "2024-01-01T00:00:00");
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(parse_raw_timestamp("2024-01-01T10:05:30").is_none());
        assert!(parse_raw_timestamp("2024-01-01 25:00:00").is_none());
        assert!(parse_raw_timestamp("").is_none());
    }
}
