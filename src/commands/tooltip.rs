//! Tooltip Registration
//!
//! The page may provide a global hook that turns an element into a tooltip
//! anchor. A missing hook or a throwing one is ignored.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub fn register_tooltip(element: &web_sys::Element, hook: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(hook)) else {
        return;
    };
    let Some(function) = value.dyn_ref::<js_sys::Function>() else {
        return;
    };
    if let Err(e) = function.call1(&window, element) {
        log::debug!("tooltip hook {} failed: {:?}", hook, e);
    }
}
