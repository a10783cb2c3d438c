//! Category Select Component
//!
//! Drop-down over a fixed list of category labels.

use leptos::prelude::*;

/// Select box; `on_change` receives the chosen label
#[component]
pub fn CategorySelect(
    #[prop(into)] value: Signal<String>,
    options: Vec<&'static str>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="category-select"
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            {options.into_iter().map(|label| {
                let is_selected = move || value.get() == label;
                view! {
                    <option value=label prop:selected=is_selected>
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
