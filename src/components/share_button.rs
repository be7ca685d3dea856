//! Share Button Component
//!
//! Copies a link that reproduces the current selections. Shows transient
//! feedback after copying; without a clipboard the link is shown inline.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::ShareStatus;
use crate::store::{use_app_store, AppStateStoreFields};

/// Share button with copy feedback
#[component]
pub fn ShareButton() -> impl IntoView {
    let store = use_app_store();
    let feedback_ms = store.session().read_untracked().config().copied_feedback_ms;

    let share = move |_| {
        let url = match store.session().read_untracked().on_share(&commands::location_href()) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Could not build share link: {}", e);
                store.share_status().set(ShareStatus::Failed);
                return;
            }
        };

        if !commands::clipboard_available() {
            store.share_status().set(ShareStatus::Manual(url));
            return;
        }

        spawn_local(async move {
            let status = match commands::copy_text(&url).await {
                Ok(()) => ShareStatus::Copied,
                Err(e) => {
                    log::warn!("{}", e);
                    ShareStatus::Failed
                }
            };
            store.share_status().set(status.clone());

            // Restore the label unless something newer happened meanwhile
            TimeoutFuture::new(feedback_ms).await;
            if store.share_status().get_untracked() == status {
                store.share_status().set(ShareStatus::Idle);
            }
        });
    };

    let label = move || match store.share_status().get() {
        ShareStatus::Copied => "Copied!",
        ShareStatus::Failed => "Copy failed",
        _ => "Share",
    };

    view! {
        <div class="share">
            <button id="share-btn" type="button" on:click=share>
                {label}
            </button>
            {move || match store.share_status().get() {
                ShareStatus::Manual(url) => Some(view! {
                    <label class="share-fallback">
                        "Clipboard not available. URL: "
                        <input
                            type="text"
                            readonly=true
                            prop:value=url
                            on:focus={move |ev| event_target::<web_sys::HtmlInputElement>(&ev).select()}
                        />
                    </label>
                }),
                _ => None,
            }}
        </div>
    }
}
