//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use bubbletea_orders_common::{Dashboard, DashboardView, LoadOutcome, ORDERS_RESOURCE_PATH};
use crate::api::orders::fetch_orders;
use crate::components::{filter_bar::FilterBar, orders_map::OrdersMap};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // ダッシュボード状態（唯一の書き込み先）と、購読で受け取る表示用スナップショット
    let (view_state, set_view_state) = signal(DashboardView::default());
    let dashboard = StoredValue::new_local(Dashboard::new());
    dashboard.update_value(|d| {
        d.subscribe(move |view| set_view_state.set(view.clone()));
    });

    // 起動時に一度だけ注文データを取得
    spawn_local(async move {
        let fetched = fetch_orders(ORDERS_RESOURCE_PATH).await;
        dashboard.update_value(|d| {
            if let LoadOutcome::Failed { reason } = d.load(fetched) {
                gloo::console::error!(format!("Failed to load orders.json: {}", reason));
            }
        });
    });

    let filtered = Memo::new(move |_| view_state.with(|v| v.filtered.orders.clone()));
    let customers = Memo::new(move |_| view_state.with(|v| v.customers.clone()));
    let visible_count = Memo::new(move |_| view_state.with(|v| v.visible_count()));
    let customer_value = Memo::new(move |_| view_state.with(|v| v.filter.customer.select_value()));
    let start_time = Memo::new(move |_| view_state.with(|v| v.filter.start.as_input()));
    let end_time = Memo::new(move |_| view_state.with(|v| v.filter.end.as_input()));

    let on_customer_change = move |value: String| {
        dashboard.update_value(|d| d.select_customer(&value));
    };

    let on_start_change = move |value: String| {
        dashboard.update_value(|d| d.set_start_time(&value));
    };

    let on_end_change = move |value: String| {
        dashboard.update_value(|d| d.set_end_time(&value));
    };

    let on_reset = move |_: ()| {
        dashboard.update_value(|d| d.reset());
    };

    view! {
        <div>
            <FilterBar
                customers=customers
                customer_value=customer_value
                on_customer_change=on_customer_change
                start_time=start_time
                end_time=end_time
                on_start_change=on_start_change
                on_end_change=on_end_change
                on_reset=on_reset
                visible_count=visible_count
            />

            <OrdersMap orders=filtered />
        </div>
    }
}
