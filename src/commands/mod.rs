//! Browser Bindings
//!
//! Thin wrappers around the browser services the table depends on,
//! organized by service.

mod catalog;
mod clipboard;
mod page;
mod storage;
mod tooltip;

// Re-export all public items
pub use catalog::*;
pub use clipboard::*;
pub use page::*;
pub use storage::*;
pub use tooltip::*;
