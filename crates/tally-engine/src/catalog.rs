//! Catalog Documents
//!
//! A catalog is either a bare array of items or an object carrying `items`
//! plus display metadata, at the top level or nested under `meta`.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::{EngineConfig, ListSpec};
use crate::error::{Error, Result};
use crate::lenient::{count_from_any, flag_or_false, flag_or_true, is_truthy, optional_count};

const META_KEYS: [&str; 3] = ["formatAsPercent", "summaryText", "title"];

/// One line item as defined by the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub desc: String,
    /// Required; any number or numeric text, truncated
    #[serde(deserialize_with = "count_from_any")]
    pub value: u64,
    #[serde(default, deserialize_with = "count_from_any")]
    pub count: u64,
    #[serde(default, deserialize_with = "flag_or_false")]
    pub checked: bool,
    #[serde(default)]
    pub tip: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_true", deserialize_with = "flag_or_true")]
    pub count_editable: bool,
    #[serde(default = "default_true", deserialize_with = "flag_or_true")]
    pub selectable: bool,
    #[serde(default, deserialize_with = "optional_count")]
    pub max_count: Option<u64>,
}

fn default_true() -> bool {
    true
}

impl CatalogItem {
    /// Tooltip text for the count field of capped rows
    pub fn max_hint(&self) -> Option<String> {
        self.max_count.map(|max| format!("Max: {}", max))
    }
}

/// Display metadata as found in the document; absent fields stay `None`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogMeta {
    pub format_as_percent: bool,
    pub summary_text: Option<String>,
    pub title: Option<String>,
}

/// Process-wide display settings, replaced on every catalog load
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub percent_mode: bool,
    pub summary_label: String,
    pub title: String,
}

impl DisplayConfig {
    pub fn new(meta: &CatalogMeta, config: &EngineConfig, list: &ListSpec) -> Self {
        Self {
            percent_mode: meta.format_as_percent,
            summary_label: meta
                .summary_text
                .clone()
                .unwrap_or_else(|| config.default_summary_label.clone()),
            title: meta.title.clone().unwrap_or_else(|| list.label.clone()),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            percent_mode: false,
            summary_label: EngineConfig::default().default_summary_label,
            title: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub items: Vec<CatalogItem>,
    pub meta: CatalogMeta,
}

/// Parse a catalog body in either accepted shape
pub fn parse_catalog(body: &str) -> Result<Catalog> {
    let document: Value = serde_json::from_str(body)?;
    let (items, meta) = match document {
        Value::Array(items) => (items, CatalogMeta::default()),
        Value::Object(mut map) => {
            let items = match map.remove("items") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(Error::UnexpectedShape(
                        "object without an items array".to_string(),
                    ))
                }
            };
            (items, read_meta(&map))
        }
        other => {
            return Err(Error::UnexpectedShape(format!(
                "expected array or object, found {}",
                kind_of(&other)
            )))
        }
    };

    let items = items
        .into_iter()
        .enumerate()
        .map(|(index, value)| parse_item(index, value))
        .collect::<Result<Vec<_>>>()?;

    Ok(Catalog { items, meta })
}

fn parse_item(index: usize, value: Value) -> Result<CatalogItem> {
    let mut item: CatalogItem = serde_json::from_value(value).map_err(|e| Error::InvalidItem {
        index,
        reason: e.to_string(),
    })?;
    item.tip = item.tip.filter(|t| !t.is_empty());
    item.url = item.url.filter(|u| !u.is_empty());
    Ok(item)
}

// Top-level fields win over `meta` when both are present
fn read_meta(map: &Map<String, Value>) -> CatalogMeta {
    if META_KEYS.iter().any(|k| map.contains_key(*k)) {
        return meta_from(map);
    }
    match map.get("meta") {
        Some(Value::Object(meta)) => meta_from(meta),
        _ => CatalogMeta::default(),
    }
}

fn meta_from(map: &Map<String, Value>) -> CatalogMeta {
    let text = |key: &str| {
        map.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    CatalogMeta {
        format_as_percent: map.get("formatAsPercent").map(is_truthy).unwrap_or(false),
        summary_text: text("summaryText"),
        title: text("title"),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array() {
        let catalog = parse_catalog(r#"[{"desc":"A","value":100,"count":0,"checked":false}]"#).unwrap();
        assert_eq!(catalog.items.len(), 1);
        let item = &catalog.items[0];
        assert_eq!(item.desc, "A");
        assert_eq!(item.value, 100);
        assert!(item.count_editable);
        assert!(item.selectable);
        assert_eq!(item.max_count, None);
        assert_eq!(catalog.meta, CatalogMeta::default());
    }

    #[test]
    fn test_object_with_top_level_meta() {
        let catalog = parse_catalog(
            r#"{"items":[{"desc":"A","value":1,"tip":"","maxCount":2}],
                "formatAsPercent":true,"summaryText":"Summe: ","title":"Crit"}"#,
        )
        .unwrap();
        assert!(catalog.meta.format_as_percent);
        assert_eq!(catalog.meta.summary_text.as_deref(), Some("Summe: "));
        assert_eq!(catalog.meta.title.as_deref(), Some("Crit"));
        assert_eq!(catalog.items[0].tip, None);
        assert_eq!(catalog.items[0].max_hint().as_deref(), Some("Max: 2"));
    }

    #[test]
    fn test_nested_meta() {
        let catalog = parse_catalog(
            r#"{"items":[],"meta":{"formatAsPercent":1,"title":"Pen"}}"#,
        )
        .unwrap();
        assert!(catalog.meta.format_as_percent);
        assert_eq!(catalog.meta.title.as_deref(), Some("Pen"));
        assert_eq!(catalog.meta.summary_text, None);
    }

    #[test]
    fn test_top_level_meta_wins() {
        let catalog = parse_catalog(
            r#"{"items":[],"formatAsPercent":false,"meta":{"formatAsPercent":true,"title":"X"}}"#,
        )
        .unwrap();
        assert!(!catalog.meta.format_as_percent);
        assert_eq!(catalog.meta.title, None);
    }

    #[test]
    fn test_unexpected_shapes() {
        assert!(matches!(parse_catalog(r#"{"rows":[]}"#), Err(Error::UnexpectedShape(_))));
        assert!(matches!(parse_catalog(r#"{"items":{}}"#), Err(Error::UnexpectedShape(_))));
        assert!(matches!(parse_catalog("42"), Err(Error::UnexpectedShape(_))));
        assert!(matches!(parse_catalog("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_required_fields() {
        let err = parse_catalog(r#"[{"desc":"A","value":1},{"desc":"B"}]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidItem { index: 1, .. }));
        let err = parse_catalog(r#"[{"value":1}]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidItem { index: 0, .. }));
    }

    #[test]
    fn test_invalid_counts_read_as_zero() {
        let catalog = parse_catalog(
            r#"[{"desc":"A","value":100,"count":-1},
                {"desc":"B","value":100,"count":"2"},
                {"desc":"C","value":100,"count":null},
                {"desc":"D","value":100,"count":1.5},
                {"desc":"E","value":100,"count":"x"}]"#,
        )
        .unwrap();
        let counts: Vec<u64> = catalog.items.iter().map(|i| i.count).collect();
        assert_eq!(counts, vec![0, 2, 0, 1, 0]);
    }

    #[test]
    fn test_loose_flags() {
        let catalog = parse_catalog(
            r#"[{"desc":"A","value":1,"checked":null,"countEditable":null,"selectable":null},
                {"desc":"B","value":1,"checked":1,"countEditable":0,"selectable":""}]"#,
        )
        .unwrap();
        let a = &catalog.items[0];
        assert!(!a.checked);
        assert!(a.count_editable);
        assert!(a.selectable);
        let b = &catalog.items[1];
        assert!(b.checked);
        assert!(!b.count_editable);
        assert!(!b.selectable);
    }

    #[test]
    fn test_value_is_truncated() {
        let catalog = parse_catalog(
            r#"[{"desc":"A","value":12.5},{"desc":"B","value":"30"},{"desc":"C","value":-4}]"#,
        )
        .unwrap();
        let values: Vec<u64> = catalog.items.iter().map(|i| i.value).collect();
        assert_eq!(values, vec![12, 30, 0]);
    }

    #[test]
    fn test_max_count_variants() {
        let catalog = parse_catalog(
            r#"[{"desc":"A","value":1,"maxCount":null},{"desc":"B","value":1,"maxCount":"3"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.items[0].max_count, None);
        assert_eq!(catalog.items[1].max_count, Some(3));
    }

    #[test]
    fn test_display_config_defaults() {
        let config = EngineConfig::default();
        let list = config.resolve_list(None).clone();
        let display = DisplayConfig::new(&CatalogMeta::default(), &config, &list);
        assert!(!display.percent_mode);
        assert_eq!(display.summary_label, "Gesamtsumme: ");
        assert_eq!(display.title, "Penetration");
    }
}
