//! Selection Session
//!
//! The explicit context that replaces page-global state: which list is
//! displayed, its display settings and rows, the load generation and the
//! one-shot shared state from the page URL. UI adapters call the `on_*`
//! handlers and render from the accessors.

use crate::catalog::{parse_catalog, CatalogItem, DisplayConfig};
use crate::codec::{
    apply_entries, decode_token, encode_token, load_state, save_state, storage_key,
    SelectionState, StateStore,
};
use crate::config::{EngineConfig, ListSpec};
use crate::error::{Error, Result};
use crate::location::{share_url, PageQuery};
use crate::row::RowModel;
use crate::sanitize::EditPhase;
use crate::total::{format_total, grand_total};

/// Handle for one in-flight catalog fetch
#[derive(Debug, Clone, PartialEq)]
pub struct LoadTicket {
    generation: u64,
    list: ListSpec,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn list(&self) -> &ListSpec {
        &self.list
    }

    pub fn catalog_url(&self) -> &str {
        &self.list.catalog_url
    }
}

/// Where restored selections came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreSource {
    SharedLink,
    Stored,
}

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded {
        rows: usize,
        restored: Option<RestoreSource>,
    },
    /// A newer load was started; this result was dropped
    Stale,
    /// Nothing changed; the previous list stays on screen
    Failed(Error),
}

#[derive(Debug, Clone, PartialEq)]
struct SharedState {
    list: Option<String>,
    token: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: EngineConfig,
    initial: ListSpec,
    active: Option<ListSpec>,
    display: DisplayConfig,
    items: Vec<CatalogItem>,
    rows: Vec<RowModel>,
    generation: u64,
    /// Generation of the load that produced `rows`
    loaded_generation: u64,
    shared: Option<SharedState>,
}

impl Session {
    pub fn new(config: EngineConfig, query: PageQuery) -> Self {
        let initial = config.resolve_list(query.list.as_deref()).clone();
        let shared = query.state.map(|token| SharedState {
            list: query.list.clone(),
            token,
        });
        Self {
            config,
            initial,
            active: None,
            display: DisplayConfig::default(),
            items: Vec::new(),
            rows: Vec::new(),
            generation: 0,
            loaded_generation: 0,
            shared,
        }
    }

    // ========================
    // Loading
    // ========================

    /// Ticket for the list named in the page URL (or the default list)
    pub fn begin_initial_load(&mut self) -> LoadTicket {
        let list = self.initial.clone();
        self.issue_ticket(list)
    }

    /// Start loading another list. Any older in-flight load becomes stale.
    pub fn on_list_switch(&mut self, list_id: &str) -> Result<LoadTicket> {
        let list = self
            .config
            .list(list_id)
            .cloned()
            .ok_or_else(|| Error::UnknownList(list_id.to_string()))?;
        Ok(self.issue_ticket(list))
    }

    fn issue_ticket(&mut self, list: ListSpec) -> LoadTicket {
        self.generation += 1;
        log::debug!("load #{} of {} from {}", self.generation, list.id, list.catalog_url);
        LoadTicket {
            generation: self.generation,
            list,
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Complete a load with the fetched body (or the fetch error)
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        body: Result<String>,
        store: &mut dyn StateStore,
    ) -> LoadOutcome {
        if !self.is_current(&ticket) {
            log::debug!("dropping stale load #{} of {}", ticket.generation, ticket.list.id);
            return LoadOutcome::Stale;
        }

        let catalog = match body.and_then(|text| parse_catalog(&text)) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("Could not load {}: {}", ticket.list.catalog_url, e);
                return LoadOutcome::Failed(e);
            }
        };

        self.display = DisplayConfig::new(&catalog.meta, &self.config, &ticket.list);
        self.rows = catalog.items.iter().map(RowModel::from_item).collect();
        self.items = catalog.items;
        self.active = Some(ticket.list);
        self.loaded_generation = ticket.generation;

        let restored = self.restore(store);
        log::info!(
            "loaded {} rows for {} (restored: {:?})",
            self.rows.len(),
            self.active_list_id(),
            restored
        );
        LoadOutcome::Loaded {
            rows: self.rows.len(),
            restored,
        }
    }

    // Shared link first (once, and only for its own list), then the store
    fn restore(&mut self, store: &mut dyn StateStore) -> Option<RestoreSource> {
        if let Some(shared) = self.take_shared_for_active() {
            if let Some(entries) = decode_token(&shared.token) {
                apply_entries(&entries, &mut self.rows);
                self.persist(store);
                return Some(RestoreSource::SharedLink);
            }
        }

        let key = self.storage_key()?;
        let entries = load_state(store, &key)?;
        apply_entries(&entries, &mut self.rows);
        Some(RestoreSource::Stored)
    }

    fn take_shared_for_active(&mut self) -> Option<SharedState> {
        let active = self.active.as_ref()?;
        let matches = match &self.shared {
            Some(shared) => shared.list.as_deref().map_or(true, |id| id == active.id),
            None => false,
        };
        if matches {
            self.shared.take()
        } else {
            None
        }
    }

    // ========================
    // Row commands
    // ========================

    /// Checkbox change; persists. Returns false for unknown or locked rows.
    pub fn on_toggle(&mut self, index: usize, checked: bool, store: &mut dyn StateStore) -> bool {
        let applied = self
            .rows
            .get_mut(index)
            .map(|row| row.set_selected(checked))
            .unwrap_or(false);
        if applied {
            self.persist(store);
        }
        applied
    }

    /// Keystroke in a count field: sanitize and recompute, no write.
    /// Returns the text the field should now show.
    pub fn on_count_input(&mut self, index: usize, raw: &str) -> Option<String> {
        let row = self.rows.get_mut(index)?;
        Some(row.set_count(raw, EditPhase::Keystroke))
    }

    /// Count field committed (change / blur): sanitize, recompute, persist
    pub fn on_count_commit(
        &mut self,
        index: usize,
        raw: &str,
        store: &mut dyn StateStore,
    ) -> Option<String> {
        let text = self.rows.get_mut(index)?.set_count(raw, EditPhase::Commit);
        self.persist(store);
        Some(text)
    }

    /// Shareable URL for the current selections, based on the page `href`
    pub fn on_share(&self, href: &str) -> Result<String> {
        let token = encode_token(&self.selection_state())?;
        Ok(share_url(href, self.active_list_id(), &token, &self.config))
    }

    /// Write the current selections under the active list's key
    pub fn persist(&self, store: &mut dyn StateStore) {
        if let Some(key) = self.storage_key() {
            save_state(store, &key, &self.selection_state());
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn lists(&self) -> &[ListSpec] {
        &self.config.lists
    }

    /// Displayed list id, or the initial list before the first load lands
    pub fn active_list_id(&self) -> &str {
        self.active.as_ref().map_or(&self.initial.id, |l| &l.id)
    }

    pub fn is_loaded(&self) -> bool {
        self.active.is_some()
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn rows(&self) -> &[RowModel] {
        &self.rows
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Changes only when a new row set replaces the old one
    pub fn loaded_generation(&self) -> u64 {
        self.loaded_generation
    }

    pub fn selection_state(&self) -> SelectionState {
        SelectionState::capture(&self.rows)
    }

    pub fn grand_total(&self) -> u64 {
        grand_total(&self.rows)
    }

    pub fn formatted_total(&self) -> String {
        format_total(self.grand_total(), self.display.percent_mode)
    }

    pub fn formatted_row_total(&self, index: usize) -> Option<String> {
        let row = self.rows.get(index)?;
        Some(format_total(row.row_total(), self.display.percent_mode))
    }

    fn storage_key(&self) -> Option<String> {
        let active = self.active.as_ref()?;
        Some(storage_key(&self.config.storage_prefix, &active.id))
    }
}
