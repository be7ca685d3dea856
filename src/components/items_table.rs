//! Items Table Component
//!
//! One row per catalog item of the displayed list. Rows are keyed by the
//! load that produced them, so a list switch rebuilds the whole body.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::models::RowView;
use crate::store::{use_app_store, AppStateStoreFields};

/// Items table component
#[component]
pub fn ItemsTable() -> impl IntoView {
    let store = use_app_store();

    let rows = move || {
        let session = store.session().read();
        let loaded = session.loaded_generation();
        session
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| (loaded, RowView::new(index, item)))
            .collect::<Vec<_>>()
    };

    view! {
        <table id="items-table" class="items-table">
            <tbody>
                <For
                    each=rows
                    key=|(loaded, row)| (*loaded, row.index)
                    children=move |(_, row)| view! { <ItemRow row=row /> }
                />
            </tbody>
        </table>
    }
}
