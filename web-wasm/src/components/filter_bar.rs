//! フィルタバーコンポーネント
//!
//! 顧客セレクト・日時範囲・リセットボタン・表示件数

use leptos::prelude::*;
use bubbletea_orders_common::{CustomerId, ALL_CUSTOMERS_VALUE};
use crate::components::date_time_range_picker::DateTimeRangePicker;

#[component]
pub fn FilterBar<FC, FS, FE, FR>(
    customers: Memo<Vec<CustomerId>>,
    customer_value: Memo<String>,
    on_customer_change: FC,
    start_time: Memo<String>,
    end_time: Memo<String>,
    on_start_change: FS,
    on_end_change: FE,
    on_reset: FR,
    visible_count: Memo<usize>,
) -> impl IntoView
where
    FC: Fn(String) + 'static + Clone,
    FS: Fn(String) + 'static + Clone,
    FE: Fn(String) + 'static + Clone,
    FR: Fn(()) + 'static + Clone,
{
    view! {
        <div class="filterbar">
            <label class="field-inline">
                <strong>"Customer:"</strong>
                <select
                    class="control"
                    prop:value=move || customer_value.get()
                    on:change={
                        let on_customer_change = on_customer_change.clone();
                        move |ev| on_customer_change(event_target_value(&ev))
                    }
                >
                    <option
                        value=ALL_CUSTOMERS_VALUE
                        selected=move || customer_value.get() == ALL_CUSTOMERS_VALUE
                    >
                        "All"
                    </option>
                    <For
                        each=move || customers.get()
                        key=|id| id.canonical()
                        children=move |id| {
                            let value = id.canonical();
                            let is_selected = {
                                let value = value.clone();
                                move || customer_value.get() == value
                            };
                            view! {
                                <option value=value.clone() selected=is_selected>
                                    {value.clone()}
                                </option>
                            }
                        }
                    />
                </select>
            </label>

            <DateTimeRangePicker
                start_time=start_time
                end_time=end_time
                on_start_change=on_start_change
                on_end_change=on_end_change
            />

            <button
                class="btn"
                on:click={
                    let on_reset = on_reset.clone();
                    move |_| on_reset(())
                }
            >
                "Reset"
            </button>

            <span class="chip">{move || format!("{} orders shown", visible_count.get())}</span>
        </div>
    }
}
