//! Clipboard
//!
//! Async Clipboard API wrapper. The API only exists in secure contexts, so
//! callers check availability first.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn clipboard() -> Option<JsValue> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Whether `navigator.clipboard` exists
pub fn clipboard_available() -> bool {
    clipboard().is_some()
}

pub async fn copy_text(text: &str) -> Result<(), String> {
    let clipboard = clipboard().ok_or_else(|| "Clipboard not available".to_string())?;
    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .ok_or_else(|| "Clipboard has no writeText".to_string())?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|_| "Clipboard write failed".to_string())?;
    JsFuture::from(js_sys::Promise::from(promise))
        .await
        .map_err(|_| "Failed to copy URL to clipboard".to_string())?;
    Ok(())
}
