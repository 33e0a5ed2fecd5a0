//! 日時範囲ピッカーコンポーネント

use leptos::prelude::*;

#[component]
pub fn DateTimeRangePicker<FS, FE>(
    start_time: Memo<String>,
    end_time: Memo<String>,
    on_start_change: FS,
    on_end_change: FE,
    #[prop(default = "Time range")] label: &'static str,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone,
    FE: Fn(String) + 'static + Clone,
{
    view! {
        <div class="dtrp">
            <strong class="dtrp-label">{label}":"</strong>

            <label class="field-inline">
                <span>"Start"</span>
                <input
                    class="control"
                    type="datetime-local"
                    prop:value=move || start_time.get()
                    on:change={
                        let on_start_change = on_start_change.clone();
                        move |ev| on_start_change(event_target_value(&ev))
                    }
                />
            </label>

            <label class="field-inline">
                <span>"End"</span>
                <input
                    class="control"
                    type="datetime-local"
                    prop:value=move || end_time.get()
                    on:change={
                        let on_end_change = on_end_change.clone();
                        move |ev| on_end_change(event_target_value(&ev))
                    }
                />
            </label>
        </div>
    }
}
