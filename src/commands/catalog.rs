//! Catalog Fetch
//!
//! GET a catalog document, bypassing the HTTP cache.

use tally_engine::{Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

/// Fetch the raw catalog body. Non-2xx statuses are errors.
pub async fn fetch_catalog(url: &str) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| Error::Transport("no window".to_string()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(url, &init).map_err(transport)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: Response = response.dyn_into().map_err(transport)?;
    if !response.ok() {
        return Err(Error::HttpStatus(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    body.as_string()
        .ok_or_else(|| Error::Transport("response body is not text".to_string()))
}

fn transport(err: JsValue) -> Error {
    Error::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
