//! Workshop Mobile UI Start-up
//!
//! Loads configuration, installs logging, builds the UI context and runs
//! every enhancement initializer.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::components::{a11y, bottom_nav, drawer, forms, lazy_images, motion, navbar, theme_toggle, touch};
use crate::config::{self, EnhanceConfig};
use crate::context::UiContext;
use crate::dom;
use crate::globals;

/// Failures skip one enhancement only
fn run(name: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{} enhancement skipped: {:?}", name, e);
    }
}

pub fn start() {
    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (EnhanceConfig::default(), Some(e)),
    };
    // A second init (e.g. script included twice) keeps the first logger
    let _ = console_logger::init(config.log_level.to_filter());
    if let Some(e) = config_error {
        log::warn!("Ignoring invalid page configuration: {}", e);
    }

    let owner = Owner::new();
    owner.with(|| {
        let ctx = UiContext::new(config);
        provide_context(ctx);

        // Live region first so later initializers can announce
        a11y::mount_live_region(ctx);

        run("theme", theme_toggle::init(ctx));
        run("bottom nav", bottom_nav::init());
        run("touch", touch::init(ctx));
        run("forms", forms::init(ctx));
        run("navbar", navbar::init(ctx));
        run("drawer", drawer::init(ctx));
        run("accessibility", a11y::init());
        run("lazy images", lazy_images::init());
        run("reduced motion", motion::init());
        run("page globals", globals::install_all());
    });
    // UI state lives for the whole page view
    std::mem::forget(owner);

    log::info!("Mobile enhancements ready");
}

/// Start now, or on DOMContentLoaded while the document is still loading
pub fn start_when_ready() {
    let Some(doc) = dom::document() else {
        return;
    };
    let ready_state = js_sys::Reflect::get(&doc, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string());

    if ready_state.as_deref() == Some("loading") {
        run("start-up", dom::listen(&doc, "DOMContentLoaded", move |_| start()));
    } else {
        start();
    }
}
