//! Summary Bar Component
//!
//! Summary label and grand total. The bar is fixed to the viewport bottom
//! and docks into `main` once the page is scrolled to its end.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::store::{use_app_store, AppStateStoreFields};

/// Tolerance when comparing the main wrapper's bottom to the viewport
const BOTTOM_SLACK_PX: f64 = 2.0;

/// Summary bar component
#[component]
pub fn SummaryBar() -> impl IntoView {
    let store = use_app_store();
    let (in_main, set_in_main) = signal(false);

    bind_summary_positioning(set_in_main);

    let label = move || store.session().read().display().summary_label.clone();
    let total = move || store.session().read().formatted_total();

    view! {
        <div id="summary" class=move || if in_main.get() { "summary in-main" } else { "summary" }>
            <span id="summary-text">{label}</span>
            <strong id="total">{total}</strong>
        </div>
    }
}

/// Whether a wrapper ending at `main_bottom` is fully scrolled into view
pub fn reaches_viewport_bottom(main_bottom: f64, viewport_height: f64) -> bool {
    main_bottom <= viewport_height + BOTTOM_SLACK_PX
}

fn main_reaches_viewport_bottom() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(main) = window
        .document()
        .and_then(|d| d.query_selector("main").ok().flatten())
    else {
        return false;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    reaches_viewport_bottom(main.get_bounding_client_rect().bottom(), viewport)
}

/// Bind window scroll/resize, coalesced to one check per animation frame
fn bind_summary_positioning(set_in_main: WriteSignal<bool>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let scheduled = Rc::new(Cell::new(false));
    let check = {
        let scheduled = scheduled.clone();
        Closure::<dyn FnMut()>::new(move || {
            scheduled.set(false);
            set_in_main.set(main_reaches_viewport_bottom());
        })
    };

    let on_scroll_or_resize = {
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            if !scheduled.replace(true) {
                let _ = window.request_animation_frame(check.as_ref().unchecked_ref());
            }
        })
    };

    for event in ["scroll", "resize"] {
        let _ = window
            .add_event_listener_with_callback(event, on_scroll_or_resize.as_ref().unchecked_ref());
    }
    on_scroll_or_resize.forget();

    // Initial check once the view is mounted
    request_animation_frame(move || set_in_main.set(main_reaches_viewport_bottom()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaches_viewport_bottom() {
        assert!(reaches_viewport_bottom(800.0, 800.0));
        assert!(reaches_viewport_bottom(801.5, 800.0));
        assert!(!reaches_viewport_bottom(900.0, 800.0));
    }
}
