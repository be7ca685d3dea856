//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The selection
//! session lives here; every row command goes through the helpers below so
//! the persistent channel is always the browser store.

use leptos::prelude::*;
use reactive_stores::Store;
use tally_engine::Session;

use crate::commands::BrowserStore;
use crate::models::ShareStatus;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Displayed list, rows and display settings
    pub session: Session,
    /// List whose catalog is being fetched
    pub pending_list: Option<String>,
    /// Last load failure, cleared by the next successful load
    pub load_error: Option<String>,
    pub share_status: ShareStatus,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            pending_list: None,
            load_error: None,
            share_status: ShareStatus::Idle,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Checkbox toggled
pub fn store_toggle(store: &AppStore, index: usize, checked: bool) {
    store.session().write().on_toggle(index, checked, &mut BrowserStore);
}

/// Keystroke in a count field; returns the sanitized field text
pub fn store_count_input(store: &AppStore, index: usize, raw: &str) -> Option<String> {
    store.session().write().on_count_input(index, raw)
}

/// Count field committed; returns the sanitized field text
pub fn store_count_commit(store: &AppStore, index: usize, raw: &str) -> Option<String> {
    store.session().write().on_count_commit(index, raw, &mut BrowserStore)
}
