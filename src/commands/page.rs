//! Page Bindings
//!
//! Location, document title and the inline config block.

use tally_engine::EngineConfig;

/// Id of the optional `<script type="application/json">` config block
const CONFIG_ELEMENT_ID: &str = "tally-config";

pub fn location_href() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Engine config from the page, or defaults
pub fn load_config() -> EngineConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    match text {
        Some(text) if !text.trim().is_empty() => EngineConfig::from_json(&text).unwrap_or_else(|e| {
            log::warn!("Ignoring page config: {}", e);
            EngineConfig::default()
        }),
        _ => EngineConfig::default(),
    }
}
