//! Application Context
//!
//! Shared handle provided via Leptos Context API: catalog loading and
//! tooltip registration, both needing the session's config.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tally_engine::{LoadOutcome, LoadTicket};

use crate::commands::{self, BrowserStore};
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    /// Global JS function name for tooltip anchors
    tooltip_hook: StoredValue<String>,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        let hook = store.session().read_untracked().config().tooltip_hook.clone();
        Self {
            store,
            tooltip_hook: StoredValue::new(hook),
        }
    }

    /// Load the list named in the page URL
    pub fn load_initial(&self) {
        let ticket = self.store.session().write().begin_initial_load();
        self.run_load(ticket);
    }

    /// Switch to another list; the current rows stay until it arrives
    pub fn switch_list(&self, list_id: &str) {
        let ticket = self.store.session().write().on_list_switch(list_id);
        match ticket {
            Ok(ticket) => self.run_load(ticket),
            Err(e) => log::warn!("{}", e),
        }
    }

    fn run_load(&self, ticket: LoadTicket) {
        let store = self.store;
        let url = ticket.catalog_url().to_string();
        store.pending_list().set(Some(ticket.list().id.clone()));

        spawn_local(async move {
            let body = commands::fetch_catalog(&url).await;
            let outcome = store.session().write().finish_load(ticket, body, &mut BrowserStore);
            match outcome {
                LoadOutcome::Loaded { .. } => {
                    store.pending_list().set(None);
                    store.load_error().set(None);
                    commands::set_document_title(&store.session().read_untracked().display().title);
                }
                LoadOutcome::Failed(e) => {
                    store.pending_list().set(None);
                    store.load_error().set(Some(format!("Could not load {}: {}", url, e)));
                }
                LoadOutcome::Stale => {}
            }
        });
    }

    pub fn register_tooltip(&self, element: &web_sys::Element) {
        self.tooltip_hook
            .with_value(|hook| commands::register_tooltip(element, hook));
    }
}
