//! Engine Configuration
//!
//! The list registry and the names used on the wire (query keys, storage
//! prefix). Everything has a default so an empty config document is valid.

use serde::{Deserialize, Serialize};

/// One switchable catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSpec {
    pub id: String,
    pub label: String,
    pub catalog_url: String,
}

impl ListSpec {
    pub fn new(id: &str, label: &str, catalog_url: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            catalog_url: catalog_url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Switchable lists, in button order
    pub lists: Vec<ListSpec>,
    pub default_list: String,
    pub storage_prefix: String,
    pub default_summary_label: String,
    pub query_list_key: String,
    pub query_state_key: String,
    /// Global JS function used to register tooltip anchors
    pub tooltip_hook: String,
    pub copied_feedback_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lists: vec![
                ListSpec::new("penetration", "Penetration", "/settings/penetration.json"),
                ListSpec::new("criticalDamage", "Critical Damage", "/settings/criticalDamage.json"),
            ],
            default_list: "penetration".to_string(),
            storage_prefix: "tally-state-".to_string(),
            default_summary_label: "Gesamtsumme: ".to_string(),
            query_list_key: "list".to_string(),
            query_state_key: "state".to_string(),
            tooltip_hook: "registerTooltip".to_string(),
            copied_feedback_ms: 2000,
        }
    }
}

impl EngineConfig {
    /// Parse a config document, falling back to defaults for missing fields
    pub fn from_json(text: &str) -> crate::Result<Self> {
        let mut config: EngineConfig = serde_json::from_str(text)?;
        if config.lists.is_empty() {
            config.lists = EngineConfig::default().lists;
        }
        if config.list(&config.default_list).is_none() {
            log::warn!("default list {:?} is not registered, using first list", config.default_list);
            config.default_list = config.lists[0].id.clone();
        }
        Ok(config)
    }

    pub fn list(&self, id: &str) -> Option<&ListSpec> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// Resolve a requested list id, falling back to the default list
    pub fn resolve_list(&self, requested: Option<&str>) -> &ListSpec {
        requested
            .and_then(|id| self.list(id))
            .or_else(|| self.list(&self.default_list))
            .unwrap_or(&self.lists[0])
    }
}
