//! # docs-chat-widget
//!
//! Leptos + WASM chat widget embedded into documentation pages: a floating
//! button that opens a chat panel, forwards questions to an AI-backed answer
//! API, and optionally escalates to a human support request.
//!
//! The crate is split so that everything except the browser glue is testable
//! natively: `state` holds the pure transition layer, `net` the wire types and
//! HTTP calls, `util` the renderer, analytics and page bootstrap helpers, and
//! `components` the Leptos views that apply state effects to the DOM.
//!
//! Built with the `csr` feature the crate exposes a `wasm_bindgen(start)`
//! entry point, so a host page only needs to load the generated module.

pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Bundle entry point: bootstrap page scripts and mount the widget once.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config::WidgetConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("docs chat widget disabled: {e}");
            return;
        }
    };

    if let Some(src) = config.cookie_consent_src.as_deref() {
        util::scripts::install_cookie_consent(src);
    }
    if let Some(tag_id) = config.tag_manager_id.as_deref() {
        util::scripts::install_tag_manager(tag_id);
    }

    util::section_observer::install(util::analytics::Analytics::from_page(None));
    components::chat_widget::mount(config);
}
