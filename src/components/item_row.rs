//! Item Row Component
//!
//! Checkbox, count field, description and the row's computed value.

use leptos::prelude::*;

use crate::components::CountInput;
use crate::context::AppContext;
use crate::models::RowView;
use crate::store::{store_toggle, use_app_store, AppStateStoreFields};

/// A single line item
#[component]
pub fn ItemRow(row: RowView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let index = row.index;
    let selectable = row.selectable;

    let selected = move || {
        store
            .session()
            .read()
            .rows()
            .get(index)
            .map(|r| r.selected())
            .unwrap_or(false)
    };
    let value = move || {
        store
            .session()
            .read()
            .formatted_row_total(index)
            .unwrap_or_default()
    };

    let link_ref = NodeRef::<leptos::html::A>::new();
    Effect::new(move |_| {
        if let Some(link) = link_ref.get() {
            ctx.register_tooltip(&link);
        }
    });

    let desc = match row.url.clone() {
        Some(url) => view! {
            <a href=url target="_blank" rel="noopener" node_ref=link_ref>{row.desc.clone()}</a>
        }
        .into_any(),
        None => view! { <span class="desc-text">{row.desc.clone()}</span> }.into_any(),
    };

    view! {
        <tr class=move || if selected() { "item-row checked" } else { "item-row" }>
            <td>
                <input
                    type="checkbox"
                    class="row-check"
                    prop:checked=selected
                    disabled=!selectable
                    on:change=move |ev| store_toggle(&store, index, event_target_checked(&ev))
                />
            </td>
            <td>
                <CountInput row=row.clone() />
            </td>
            <td class="desc">
                {desc}
                <span class="info" data-tip=row.tip.clone()>"i"</span>
            </td>
            <td class="value">{value}</td>
        </tr>
    }
}
