//! Frontend Models
//!
//! View-side data derived from the engine's catalog items.

use tally_engine::CatalogItem;

/// Static per-row presentation, fixed for the lifetime of a loaded list
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub index: usize,
    pub desc: String,
    pub tip: Option<String>,
    pub url: Option<String>,
    /// "Max: N" for capped rows
    pub max_hint: Option<String>,
    pub max_count: Option<u64>,
    pub count_editable: bool,
    pub selectable: bool,
}

impl RowView {
    pub fn new(index: usize, item: &CatalogItem) -> Self {
        Self {
            index,
            desc: item.desc.clone(),
            tip: item.tip.clone(),
            url: item.url.clone(),
            max_hint: item.max_hint(),
            max_count: item.max_count,
            count_editable: item.count_editable,
            selectable: item.selectable,
        }
    }
}

/// Feedback of the share button
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ShareStatus {
    #[default]
    Idle,
    Copied,
    Failed,
    /// No clipboard: show the link for manual copying
    Manual(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_view_from_item() {
        let item = CatalogItem {
            desc: "Sharpened".to_string(),
            value: 1638,
            count: 0,
            checked: false,
            tip: Some("Weapon trait".to_string()),
            url: None,
            count_editable: false,
            selectable: true,
            max_count: Some(2),
        };
        let view = RowView::new(3, &item);
        assert_eq!(view.index, 3);
        assert_eq!(view.max_hint.as_deref(), Some("Max: 2"));
        assert!(!view.count_editable);
    }
}
