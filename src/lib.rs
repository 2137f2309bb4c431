//! # xoom-chat-widget
//!
//! Leptos + WASM chat widget for the Xoom Media marketing site.
//!
//! The widget mounts into `#root`, shows a floating launcher, and opens a
//! chat panel that relays each user message to a webhook and displays the
//! reply. State transitions and the webhook pipeline are plain Rust and
//! test natively; browser glue is gated behind the `csr` feature.

pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install logging and mount the widget.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    mount();
}

/// Mount the widget into the `#root` element, replacing its contents.
#[cfg(feature = "csr")]
pub fn mount() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::components::chat_widget::ChatWidget;
    use crate::config::{MOUNT_ID, WidgetConfig};

    let Some(anchor) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
    else {
        leptos::logging::warn!("chat widget: no #{MOUNT_ID} element to mount into");
        return;
    };

    let config = WidgetConfig::from_mount_element(&anchor);
    let Ok(anchor) = anchor.dyn_into::<web_sys::HtmlElement>() else {
        leptos::logging::warn!("chat widget: #{MOUNT_ID} is not an HTML element");
        return;
    };
    anchor.set_inner_html("");

    leptos::logging::log!("chat widget mounted (webhook: {})", config.webhook_url);
    leptos::mount::mount_to(anchor, move || view! { <ChatWidget config/> }).forget();
}
