//! Count Input Component
//!
//! Numeric field that sanitizes as the user types. Keystrokes only
//! recompute; the change event commits and persists.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::RowView;
use crate::store::{store_count_commit, store_count_input, use_app_store, AppStateStoreFields};

/// Count field for one row
#[component]
pub fn CountInput(row: RowView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let index = row.index;
    let editable = row.count_editable;
    let initial = store
        .session()
        .read_untracked()
        .rows()
        .get(index)
        .map(|r| r.count().to_string())
        .unwrap_or_else(|| "0".to_string());

    let input_ref = NodeRef::<leptos::html::Input>::new();
    if row.max_hint.is_some() {
        Effect::new(move |_| {
            if let Some(input) = input_ref.get() {
                ctx.register_tooltip(&input);
            }
        });
    }

    view! {
        <input
            type="text"
            class="row-count"
            inputmode="numeric"
            pattern="\\d*"
            autocomplete="off"
            node_ref=input_ref
            prop:value=initial
            readonly=!editable
            tabindex=if editable { "0" } else { "-1" }
            aria-readonly=if editable { "false" } else { "true" }
            max=row.max_count.map(|max| max.to_string())
            title=row.max_hint.clone()
            data-tip=row.max_hint.clone()
            on:input=move |ev| {
                let input = event_target::<web_sys::HtmlInputElement>(&ev);
                if let Some(text) = store_count_input(&store, index, &input.value()) {
                    if text != input.value() {
                        input.set_value(&text);
                    }
                }
            }
            on:change=move |ev| {
                let input = event_target::<web_sys::HtmlInputElement>(&ev);
                if let Some(text) = store_count_commit(&store, index, &input.value()) {
                    if text != input.value() {
                        input.set_value(&text);
                    }
                }
            }
        />
    }
}
