//! Row Model
//!
//! The mutable per-line state. Flags come from the catalog and never change
//! after construction; only `selected` and `count` move.

use crate::catalog::CatalogItem;
use crate::sanitize::{clamp_count, parse_count, sanitize, EditPhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowModel {
    pub base_value: u64,
    selected: bool,
    count: u64,
    pub max_count: Option<u64>,
    pub count_editable: bool,
    pub selectable: bool,
}

impl RowModel {
    /// Build a row from its catalog item, clamping the initial count
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            base_value: item.value,
            selected: item.selectable && item.checked,
            count: clamp_count(item.count, item.max_count),
            max_count: item.max_count,
            count_editable: item.count_editable,
            selectable: item.selectable,
        }
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns false when the row is not selectable
    pub fn set_selected(&mut self, value: bool) -> bool {
        if !self.selectable {
            return false;
        }
        self.selected = value;
        true
    }

    /// Sanitize `raw`, store the count and return the text the field should show.
    /// Read-only rows keep their count and echo it back.
    pub fn set_count(&mut self, raw: &str, phase: EditPhase) -> String {
        if !self.count_editable {
            return self.count.to_string();
        }
        let text = sanitize(raw, self.max_count, phase);
        self.count = parse_count(&text);
        text
    }

    /// Apply a persisted entry. Invariants win over the stored values.
    pub fn restore(&mut self, selected: bool, count: u64) {
        self.set_selected(selected);
        if self.count_editable {
            self.count = clamp_count(count, self.max_count);
        }
    }

    /// Deselected rows contribute zero regardless of count
    pub fn row_total(&self) -> u64 {
        if self.selected {
            self.base_value.saturating_mul(self.count)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(value: u64, count: u64, max_count: Option<u64>) -> CatalogItem {
        CatalogItem {
            desc: format!("Item {}", value),
            value,
            count,
            checked: false,
            tip: None,
            url: None,
            count_editable: true,
            selectable: true,
            max_count,
        }
    }

    #[test]
    fn test_deselected_row_is_zero() {
        let mut row = RowModel::from_item(&make_item(100, 5, None));
        assert_eq!(row.row_total(), 0);
        row.set_selected(true);
        assert_eq!(row.row_total(), 500);
        row.set_selected(false);
        assert_eq!(row.row_total(), 0);
    }

    #[test]
    fn test_initial_count_clamped() {
        let row = RowModel::from_item(&make_item(10, 9, Some(2)));
        assert_eq!(row.count(), 2);
    }

    #[test]
    fn test_not_selectable() {
        let mut item = make_item(10, 1, None);
        item.checked = true;
        item.selectable = false;
        let mut row = RowModel::from_item(&item);
        assert!(!row.selected());
        assert!(!row.set_selected(true));
        assert!(!row.selected());
    }

    #[test]
    fn test_set_count_clamps() {
        let mut row = RowModel::from_item(&make_item(100, 0, Some(2)));
        assert_eq!(row.set_count("9", EditPhase::Keystroke), "2");
        assert_eq!(row.count(), 2);
        assert_eq!(row.set_count("", EditPhase::Keystroke), "");
        assert_eq!(row.count(), 0);
        assert_eq!(row.set_count("", EditPhase::Commit), "0");
    }

    #[test]
    fn test_read_only_count() {
        let mut item = make_item(100, 3, None);
        item.count_editable = false;
        let mut row = RowModel::from_item(&item);
        assert_eq!(row.set_count("7", EditPhase::Commit), "3");
        row.restore(true, 9);
        assert_eq!(row.count(), 3);
        assert!(row.selected());
    }

    #[test]
    fn test_restore_respects_max() {
        let mut row = RowModel::from_item(&make_item(1, 0, Some(4)));
        row.restore(true, 40);
        assert_eq!(row.count(), 4);
    }

    #[test]
    fn test_row_total_saturates() {
        let mut row = RowModel::from_item(&make_item(u64::MAX, 2, None));
        row.set_selected(true);
        assert_eq!(row.row_total(), u64::MAX);
    }
}
