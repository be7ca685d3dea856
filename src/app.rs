//! Tally Table Frontend App
//!
//! Root component: list switcher, items table, share action and summary.

use leptos::prelude::*;
use reactive_stores::Store;
use tally_engine::{PageQuery, Session};

use crate::commands;
use crate::components::{ItemsTable, ListSwitcher, ShareButton, SummaryBar};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = commands::load_config();
    let query = PageQuery::from_search(&commands::location_search(), &config);
    let store = Store::new(AppState::new(Session::new(config, query)));

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new(store);
    provide_context(ctx);

    ctx.load_initial();

    let title = move || store.session().read().display().title.clone();

    view! {
        <main class="tally-app">
            <h1>{title}</h1>

            <ListSwitcher />

            {move || store.load_error().get().map(|message| view! {
                <p class="load-error">{message}</p>
            })}

            <ItemsTable />

            <ShareButton />

            <SummaryBar />
        </main>
    }
}
