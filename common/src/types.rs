//! 注文データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - CustomerId: 数値（整数・小数）または文字列の顧客ID
//! - Order: `orders.json` の1レコード

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::time::parse_instant;

/// 顧客ID
///
/// `orders.json` では数値・文字列のどちらもあり得る。
/// 整数で表せる数値は `Numeric`、それ以外の数値（`1.5` や i64 に収まらない値）は `Decimal`。
/// 並び順は数値同士は数値順、文字列同士は辞書順、数値が文字列より前。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "WireCustomerId", into = "WireCustomerId")]
pub enum CustomerId {
    Numeric(i64),
    Decimal(f64),
    Text(String),
}

/// JSON上の表現
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WireCustomerId {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl From<WireCustomerId> for CustomerId {
    fn from(wire: WireCustomerId) -> Self {
        match wire {
            WireCustomerId::Integer(n) => CustomerId::Numeric(n),
            WireCustomerId::Number(n) => CustomerId::from_number(n),
            WireCustomerId::Text(s) => CustomerId::Text(s),
        }
    }
}

impl From<CustomerId> for WireCustomerId {
    fn from(id: CustomerId) -> Self {
        match id {
            CustomerId::Numeric(n) => WireCustomerId::Integer(n),
            CustomerId::Decimal(n) => WireCustomerId::Number(n),
            CustomerId::Text(s) => WireCustomerId::Text(s),
        }
    }
}

/// i64 として正確に表せる範囲（±2^63）
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl CustomerId {
    /// 数値から作る（`2.0` は `Numeric(2)`、`-0.0` は `Numeric(0)`）
    pub fn from_number(value: f64) -> Self {
        if value.fract() == 0.0 && value > -I64_BOUND && value < I64_BOUND {
            CustomerId::Numeric(value as i64)
        } else {
            CustomerId::Decimal(value)
        }
    }

    /// CSVの値から作る（数値として読めれば数値扱い）
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return CustomerId::Numeric(n);
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => CustomerId::from_number(n),
            _ => CustomerId::Text(trimmed.to_string()),
        }
    }

    /// 比較用の正規化文字列（JSの `String(id)` と同じ表記）
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

/// JSの `Number.prototype.toString` 相当
fn format_js_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }
    // 指数表記: 1e21 -> "1e+21", 1e-7 -> "1e-7"
    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

impl PartialEq for CustomerId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CustomerId::Numeric(a), CustomerId::Numeric(b)) => a == b,
            (CustomerId::Decimal(a), CustomerId::Decimal(b)) => a.to_bits() == b.to_bits(),
            (CustomerId::Text(a), CustomerId::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for CustomerId {}

impl Hash for CustomerId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CustomerId::Numeric(n) => n.hash(state),
            CustomerId::Decimal(n) => n.to_bits().hash(state),
            CustomerId::Text(s) => s.hash(state),
        }
    }
}

impl Ord for CustomerId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CustomerId::Numeric(a), CustomerId::Numeric(b)) => a.cmp(b),
            (CustomerId::Decimal(a), CustomerId::Decimal(b)) => a.total_cmp(b),
            (CustomerId::Numeric(a), CustomerId::Decimal(b)) => {
                (*a as f64).total_cmp(b).then(Ordering::Less)
            }
            (CustomerId::Decimal(a), CustomerId::Numeric(b)) => {
                a.total_cmp(&(*b as f64)).then(Ordering::Greater)
            }
            (CustomerId::Text(a), CustomerId::Text(b)) => a.cmp(b),
            (CustomerId::Text(_), _) => Ordering::Greater,
            (_, CustomerId::Text(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for CustomerId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerId::Numeric(n) => write!(f, "{}", n),
            CustomerId::Decimal(n) => f.write_str(&format_js_number(*n)),
            CustomerId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CustomerId {
    fn from(value: i64) -> Self {
        CustomerId::Numeric(value)
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        CustomerId::Text(value.to_string())
    }
}

/// 注文レコード（読み込み後は変更しない）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub customer_id: CustomerId,

    /// 注文日時（ISO-8601風の文字列、欠損あり）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// 緯度（検証しない。欠損時は地図に描画されない）
    #[serde(default)]
    pub lat: Option<f64>,

    /// 経度
    #[serde(default)]
    pub lon: Option<f64>,
}

impl Order {
    /// 日時を比較可能な値に変換（欠損・解釈不能は `None`）
    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.timestamp.as_deref().and_then(parse_instant)
    }

    /// 地図に置ける座標
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }
}
