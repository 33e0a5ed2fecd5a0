//! 日時パース・時間範囲の境界
//!
//! 注文の `timestamp` とフィルタの開始/終了入力（`datetime-local`）を
//! 同じ壁時計時刻（タイムゾーン正規化なし）として比較する。

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

/// 受け付ける日時フォーマット（`T` 区切り・スペース区切り）
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// 入力欄の値として書き出すフォーマット
const INPUT_FORMAT_MINUTES: &str = "%Y-%m-%dT%H:%M";
const INPUT_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// 文字列を比較可能な日時に変換
///
/// 空文字列・解釈できない文字列は `None`。
/// オフセット付き (RFC 3339) の場合は記載された壁時計時刻で比較する。
pub fn parse_instant(input: &str) -> Option<NaiveDateTime> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `datetime-local` 入力欄に戻せる形式で書き出す
pub fn format_input(dt: &NaiveDateTime) -> String {
    if dt.second() == 0 && dt.nanosecond() == 0 {
        dt.format(INPUT_FORMAT_MINUTES).to_string()
    } else {
        dt.format(INPUT_FORMAT_SECONDS).to_string()
    }
}

/// 時間範囲フィルタの片側の境界
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeBound {
    /// 境界なし（入力欄が空）
    #[default]
    Unbounded,
    /// 有効な日時
    At(NaiveDateTime),
    /// 空でないが解釈できない入力。どの注文にも一致しない
    Invalid(String),
}

impl TimeBound {
    /// 入力欄の文字列から境界を作る
    pub fn from_input(input: &str) -> Self {
        if input.trim().is_empty() {
            return TimeBound::Unbounded;
        }
        match parse_instant(input) {
            Some(dt) => TimeBound::At(dt),
            None => {
                tracing::warn!(input, "unparsable time bound, no order will match");
                TimeBound::Invalid(input.to_string())
            }
        }
    }

    /// 境界が設定されているか
    pub fn is_active(&self) -> bool {
        !matches!(self, TimeBound::Unbounded)
    }

    /// 入力欄に表示する値
    pub fn as_input(&self) -> String {
        match self {
            TimeBound::Unbounded => String::new(),
            TimeBound::At(dt) => format_input(dt),
            TimeBound::Invalid(raw) => raw.clone(),
        }
    }

    /// 開始境界として判定（`instant >= bound`）
    ///
    /// 境界が設定されていて注文側の日時が無い場合は一致しない。
    pub fn admits_after(&self, instant: Option<NaiveDateTime>) -> bool {
        match self {
            TimeBound::Unbounded => true,
            TimeBound::At(bound) => instant.is_some_and(|t| t >= *bound),
            TimeBound::Invalid(_) => false,
        }
    }

    /// 終了境界として判定（`instant <= bound`）
    pub fn admits_before(&self, instant: Option<NaiveDateTime>) -> bool {
        match self {
            TimeBound::Unbounded => true,
            TimeBound::At(bound) => instant.is_some_and(|t| t <= *bound),
            TimeBound::Invalid(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_parse_datetime_local_minutes() {
        assert_eq!(parse_instant("2024-01-01T10:00"), Some(dt("2024-01-01 10:00:00")));
    }

    #[test]
    fn test_parse_with_seconds_and_space() {
        assert_eq!(parse_instant("2024-01-01T10:00:30"), Some(dt("2024-01-01 10:00:30")));
        assert_eq!(parse_instant("2024-01-01 10:00:30"), Some(dt("2024-01-01 10:00:30")));
        assert_eq!(parse_instant("  2024-01-01 10:00  "), Some(dt("2024-01-01 10:00:00")));
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let parsed = parse_instant("2024-01-01T10:00:30.250").unwrap();
        assert_eq!(parsed.second(), 30);
        assert_eq!(parsed.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_parse_rfc3339_keeps_wall_clock() {
        assert_eq!(
            parse_instant("2024-01-01T10:00:00+02:00"),
            Some(dt("2024-01-01 10:00:00"))
        );
        assert_eq!(parse_instant("2024-01-01T10:00:00Z"), Some(dt("2024-01-01 10:00:00")));
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        assert_eq!(parse_instant("2024-03-05"), Some(dt("2024-03-05 00:00:00")));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_instant(""), None);
        assert_eq!(parse_instant("   "), None);
        assert_eq!(parse_instant("yesterday"), None);
        assert_eq!(parse_instant("2024-13-01T10:00"), None);
    }

    #[test]
    fn test_format_input() {
        assert_eq!(format_input(&dt("2024-01-02 00:00:00")), "2024-01-02T00:00");
        assert_eq!(format_input(&dt("2024-01-02 08:15:09")), "2024-01-02T08:15:09");
    }

    #[test]
    fn test_time_bound_from_input() {
        assert_eq!(TimeBound::from_input(""), TimeBound::Unbounded);
        assert_eq!(
            TimeBound::from_input("2024-01-02T00:00"),
            TimeBound::At(dt("2024-01-02 00:00:00"))
        );
        assert_eq!(
            TimeBound::from_input("not a date"),
            TimeBound::Invalid("not a date".to_string())
        );
    }

    #[test]
    fn test_time_bound_as_input_round_trips_user_text() {
        assert_eq!(TimeBound::Unbounded.as_input(), "");
        assert_eq!(TimeBound::from_input("2024-01-02T00:00").as_input(), "2024-01-02T00:00");
        assert_eq!(TimeBound::from_input("abc").as_input(), "abc");
    }

    #[test]
    fn test_admits_is_inclusive() {
        let bound = TimeBound::At(dt("2024-01-02 00:00:00"));
        let same = Some(dt("2024-01-02 00:00:00"));
        assert!(bound.admits_after(same));
        assert!(bound.admits_before(same));
        assert!(!bound.admits_after(Some(dt("2024-01-01 23:59:59"))));
        assert!(!bound.admits_before(Some(dt("2024-01-02 00:00:01"))));
    }

    #[test]
    fn test_missing_instant_only_passes_unbounded() {
        assert!(TimeBound::Unbounded.admits_after(None));
        assert!(TimeBound::Unbounded.admits_before(None));
        assert!(!TimeBound::At(dt("2024-01-02 00:00:00")).admits_after(None));
        assert!(!TimeBound::At(dt("2024-01-02 00:00:00")).admits_before(None));
    }

    #[test]
    fn test_invalid_bound_matches_nothing() {
        let bound = TimeBound::Invalid("??".to_string());
        assert!(bound.is_active());
        assert!(!bound.admits_after(Some(dt("2024-01-02 00:00:00"))));
        assert!(!bound.admits_before(Some(dt("2024-01-02 00:00:00"))));
    }
}
