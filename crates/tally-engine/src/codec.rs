//! Selection State Codec
//!
//! Two layers, kept apart so each can be tested alone:
//! - structural: `[{index, checked, count}]` as JSON (what the persistent store holds)
//! - transport: the JSON percent-encoded as a URI component, then base64
//!   (what the `state` query parameter holds). Reversible, not a secret.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::row::RowModel;
use crate::lenient::count_from_any;

/// Same unreserved set as `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Per-row user input, the only thing ever persisted or shared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowState {
    pub selected: bool,
    pub count: u64,
}

/// Selection and count of every row, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub rows: Vec<RowState>,
}

/// Wire form of one row. `index` may point past the current catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEntry {
    pub index: usize,
    #[serde(default)]
    pub checked: bool,
    /// Older tokens carried the raw field text
    #[serde(default, deserialize_with = "count_from_any")]
    pub count: u64,
}

impl SelectionState {
    pub fn capture(rows: &[RowModel]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| RowState {
                    selected: row.selected(),
                    count: row.count(),
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> Vec<StateEntry> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| StateEntry {
                index,
                checked: row.selected,
                count: row.count,
            })
            .collect()
    }
}

// ========================
// Structural layer
// ========================

pub fn to_json(state: &SelectionState) -> Result<String> {
    Ok(serde_json::to_string(&state.entries())?)
}

pub fn from_json(text: &str) -> Result<Vec<StateEntry>> {
    serde_json::from_str(text).map_err(|e| Error::StateDecode(e.to_string()))
}

// ========================
// Obscuring layer
// ========================

pub fn obscure(json: &str) -> String {
    let escaped = utf8_percent_encode(json, URI_COMPONENT).to_string();
    STANDARD.encode(escaped)
}

pub fn reveal(token: &str) -> Result<String> {
    // A '+' that went through form decoding unescaped comes back as a space
    let token = token.trim().replace(' ', "+");
    let bytes = STANDARD
        .decode(token.as_bytes())
        .map_err(|e| Error::StateDecode(e.to_string()))?;
    let escaped = String::from_utf8(bytes).map_err(|e| Error::StateDecode(e.to_string()))?;
    percent_decode_str(&escaped)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| Error::StateDecode(e.to_string()))
}

// ========================
// Token API
// ========================

pub fn encode_token(state: &SelectionState) -> Result<String> {
    Ok(obscure(&to_json(state)?))
}

/// Any failure means "no state"
pub fn decode_token(token: &str) -> Option<Vec<StateEntry>> {
    match reveal(token).and_then(|json| from_json(&json)) {
        Ok(entries) => Some(entries),
        Err(e) => {
            log::warn!("Could not decode shared state: {}", e);
            None
        }
    }
}

/// Apply entries onto existing rows. Out-of-range indices are dropped.
/// Returns how many entries were applied.
pub fn apply_entries(entries: &[StateEntry], rows: &mut [RowModel]) -> usize {
    let mut applied = 0;
    for entry in entries {
        if let Some(row) = rows.get_mut(entry.index) {
            row.restore(entry.checked, entry.count);
            applied += 1;
        }
    }
    applied
}

// ========================
// Persistent channel
// ========================

/// Key/value persistence, last write wins
pub trait StateStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// In-memory store for headless use
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Storage key namespaced by list id
pub fn storage_key(prefix: &str, list_id: &str) -> String {
    format!("{}{}", prefix, list_id)
}

pub fn save_state(store: &mut dyn StateStore, key: &str, state: &SelectionState) {
    match to_json(state) {
        Ok(json) => store.save(key, &json),
        Err(e) => log::warn!("Could not save state under {}: {}", key, e),
    }
}

pub fn load_state(store: &dyn StateStore, key: &str) -> Option<Vec<StateEntry>> {
    let saved = store.load(key)?;
    match from_json(&saved) {
        Ok(entries) => Some(entries),
        Err(e) => {
            log::warn!("Could not restore state from {}: {}", key, e);
            None
        }
    }
}
