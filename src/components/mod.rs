//! UI Components
//!
//! Leptos components for the tally table.

mod list_switcher;
mod items_table;
mod item_row;
mod count_input;
mod share_button;
mod summary_bar;

pub use list_switcher::ListSwitcher;
pub use items_table::ItemsTable;
pub use item_row::ItemRow;
pub use count_input::CountInput;
pub use share_button::ShareButton;
pub use summary_bar::SummaryBar;
