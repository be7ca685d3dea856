//! Tally Engine
//!
//! Headless core of the tally table: count sanitizing, row model, totals,
//! the selection state codec, catalog parsing and the session that ties
//! them together. No browser dependency; the UI crate adapts it to the DOM.

pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
mod lenient;
pub mod location;
pub mod row;
pub mod sanitize;
pub mod session;
pub mod total;

pub use catalog::{parse_catalog, Catalog, CatalogItem, CatalogMeta, DisplayConfig};
pub use codec::{MemoryStore, SelectionState, StateEntry, StateStore};
pub use config::{EngineConfig, ListSpec};
pub use error::{Error, Result};
pub use location::PageQuery;
pub use row::RowModel;
pub use sanitize::EditPhase;
pub use session::{LoadOutcome, LoadTicket, RestoreSource, Session};
pub use total::{format_amount, format_total};
