//! 地図表示用データ
//!
//! 地図ウィジェット（Leaflet）はフィルタ処理を持たず、
//! 絞り込み済みの注文から作ったマーカーだけを受け取る。

use serde::{Deserialize, Serialize};

use crate::types::Order;

/// 既定の地図中心 [lat, lon]
pub const DEFAULT_CENTER: [f64; 2] = [52.5127761, 13.3391605];

/// 既定のズームレベル
pub const DEFAULT_ZOOM: u8 = 15;

/// タイルサーバーURLテンプレート
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// タイル帰属表示（必須）
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

/// JSブリッジへ渡すマーカー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub popup_html: String,
}

/// 座標を小数点以下6桁で整形
pub fn format_coordinate(value: f64) -> String {
    format!("{:.6}", value)
}

/// ポップアップ本文（顧客ID・日時・座標）
pub fn popup_html(order: &Order, lat: f64, lon: f64) -> String {
    format!(
        "<div><div><b>Customer:</b> {}</div><div><b>Time:</b> {}</div>\
         <div><b>Lat:</b> {}, <b>Lon:</b> {}</div></div>",
        escape_html(&order.customer_id.to_string()),
        escape_html(order.timestamp.as_deref().unwrap_or("")),
        format_coordinate(lat),
        format_coordinate(lon),
    )
}

/// 座標のある注文だけをマーカーに変換（入力順を保持）
pub fn markers_for(orders: &[Order]) -> Vec<MapMarker> {
    let markers: Vec<MapMarker> = orders
        .iter()
        .filter_map(|order| {
            let (lat, lon) = order.position()?;
            Some(MapMarker {
                lat,
                lon,
                popup_html: popup_html(order, lat, lon),
            })
        })
        .collect();

    let skipped = orders.len() - markers.len();
    if skipped > 0 {
        tracing::debug!(skipped, "orders without coordinates not drawn");
    }
    markers
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
