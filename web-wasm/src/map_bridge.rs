//! Leaflet 地図ウィジェットへのブリッジ

use bubbletea_orders_common::map::{DEFAULT_CENTER, DEFAULT_ZOOM, TILE_ATTRIBUTION, TILE_URL};
use bubbletea_orders_common::MapMarker;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/orders-map.js")]
extern "C" {
    #[wasm_bindgen(js_name = "initMap")]
    fn init_map_js(element_id: &str, lat: f64, lon: f64, zoom: u8, tile_url: &str, attribution: &str);

    #[wasm_bindgen(js_name = "setMarkers")]
    fn set_markers_js(markers: JsValue);
}

/// 地図を初期化（二回目以降は何もしない）
pub fn init_map(element_id: &str) {
    init_map_js(
        element_id,
        DEFAULT_CENTER[0],
        DEFAULT_CENTER[1],
        DEFAULT_ZOOM,
        TILE_URL,
        TILE_ATTRIBUTION,
    );
}

/// 表示中のマーカーを置き換える
pub fn set_markers(markers: &[MapMarker]) -> Result<(), String> {
    let value = serde_wasm_bindgen::to_value(markers)
        .map_err(|e| format!("マーカー変換失敗: {}", e))?;
    set_markers_js(value);
    Ok(())
}
