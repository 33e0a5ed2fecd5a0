//! 注文マップコンポーネント
//!
//! 絞り込み済みの注文だけを受け取り、マーカーとして描画する。

use leptos::html::Div;
use leptos::prelude::*;
use bubbletea_orders_common::{markers_for, Order};
use crate::map_bridge;

const MAP_ELEMENT_ID: &str = "orders-map";

#[component]
pub fn OrdersMap(orders: Memo<Vec<Order>>) -> impl IntoView {
    let container = NodeRef::<Div>::new();

    // マウント後に地図を作り、注文が変わるたびにマーカーを差し替える
    Effect::new(move |_| {
        let markers = orders.with(|orders| markers_for(orders));
        if container.get().is_none() {
            return;
        }
        map_bridge::init_map(MAP_ELEMENT_ID);
        if let Err(e) = map_bridge::set_markers(&markers) {
            gloo::console::error!(e);
        }
    });

    view! {
        <div style="height: 90vh; width: 100vw;">
            <div id=MAP_ELEMENT_ID node_ref=container style="height: 100%; width: 100%;"></div>
        </div>
    }
}
