//! Local Storage
//!
//! Persistent channel for selection state.

use gloo_storage::{LocalStorage, Storage};
use tally_engine::StateStore;

/// `window.localStorage`, fire-and-forget writes
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl StateStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            log::warn!("Could not write {}: {:?}", key, e);
        }
    }
}
