//! 注文データ取得
//!
//! `orders.json` を一度だけ取得する。再試行・タイムアウトなし。

use bubbletea_orders_common::{parse_orders, Error, Order, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 注文JSONを取得してパース
///
/// # Arguments
/// * `path` - 取得先（通常は `/orders.json`）
///
/// # Returns
/// * `Ok(Vec<Order>)` - 取得・パース成功
/// * `Err(Error::Load)` - ネットワークエラー・HTTPエラー
/// * `Err(Error::Json)` - JSONが不正
pub async fn fetch_orders(path: &str) -> Result<Vec<Order>> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(path, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Load("window が取得できません".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Load(format!("HTTP {} ({})", resp.status(), path)));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = text
        .as_string()
        .ok_or_else(|| Error::Load("レスポンスを文字列に変換できません".into()))?;

    parse_orders(&text)
}

fn js_error(value: JsValue) -> Error {
    Error::Load(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}
