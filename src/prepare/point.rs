//! `point` 列（`[lat, lon]`）のパース

use regex::Regex;

/// `[lat, lon]` 形式の座標をパース
///
/// 1. JSON配列 / Pythonタプル形式（`[52.5, 13.4]`, `(52.5, 13.4)`）
/// 2. 失敗したら文字列中の最初の2つの数値を拾う
/// 3. それでも無理なら `None`
pub fn parse_point(value: &str) -> Option<(f64, f64)> {
    let s = value.trim();

    let bracketed = if s.starts_with('(') && s.ends_with(')') {
        format!("[{}]", &s[1..s.len() - 1])
    } else {
        s.to_string()
    };
    if let Ok(pair) = serde_json::from_str::<Vec<f64>>(&bracketed) {
        if pair.len() == 2 {
            return Some((pair[0], pair[1]));
        }
    }

    lazy_static::lazy_static! {
        static ref NUMBER_RE: Regex = Regex::new(r"[-+]?\d*\.\d+|\d+").unwrap();
    }

    let numbers: Vec<f64> = NUMBER_RE
        .find_iter(s)
        .filter_map(|m| m.as_str().parse().ok())
        .take(2)
        .collect();

    match numbers.as_slice() {
        [lat, lon] => Some((*lat, *lon)),
        _ => None,
    }
}
