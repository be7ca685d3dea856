//! List Switcher Component
//!
//! One link per configured list; the displayed list is marked active.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// List switcher component
#[component]
pub fn ListSwitcher() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (lists, list_key) = {
        let session = store.session().read_untracked();
        (session.lists().to_vec(), session.config().query_list_key.clone())
    };

    view! {
        <nav class="list-switcher">
            {lists.into_iter().map(|list| {
                let id = list.id.clone();
                let href = format!("?{}={}", list_key, list.id);
                let is_active = {
                    let id = id.clone();
                    move || {
                        let session = store.session().read();
                        session.is_loaded() && session.active_list_id() == id
                    }
                };
                let is_pending = {
                    let id = id.clone();
                    move || store.pending_list().read().as_deref() == Some(id.as_str())
                };
                let link_class = move || {
                    let mut c = String::from("list-link");
                    if is_active() { c.push_str(" active"); }
                    if is_pending() { c.push_str(" loading"); }
                    c
                };

                view! {
                    <a
                        id=format!("link-list-{}", list.id)
                        class=link_class
                        href=href
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.switch_list(&id);
                        }
                    >
                        {list.label}
                    </a>
                }
            }).collect_view()}
        </nav>
    }
}
