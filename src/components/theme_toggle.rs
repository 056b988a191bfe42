//! Dark Mode Toggle Component
//!
//! Applies the persisted theme on load and wires the primary and drawer toggles.

use wasm_bindgen::JsValue;

use crate::context::UiContext;
use crate::dom;
use crate::models::Theme;
use crate::store::{store_set_theme, store_theme};
use crate::theme::{load_theme, theme_announcement, toggle_theme, BrowserStorage, DARK_MODE_CLASS};

pub const PRIMARY_TOGGLE_ID: &str = "dark-mode-toggle";
pub const DRAWER_TOGGLE_ID: &str = "drawer-dark-mode-toggle";

fn apply_theme(theme: Theme) -> Result<(), JsValue> {
    if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
        dom::set_class(&root, DARK_MODE_CLASS, theme.is_dark())?;
    }
    for id in [PRIMARY_TOGGLE_ID, DRAWER_TOGGLE_ID] {
        if let Some(toggle) = dom::by_id(id) {
            toggle.set_attribute("aria-pressed", if theme.is_dark() { "true" } else { "false" })?;
        }
    }
    Ok(())
}

/// Flip dark mode, persist it and announce the change
pub fn toggle(ctx: UiContext) {
    let next = toggle_theme(store_theme(&ctx.store), &BrowserStorage);
    store_set_theme(&ctx.store, next);
    if let Err(e) = apply_theme(next) {
        log::warn!("Could not apply theme: {:?}", e);
    }
    ctx.announce(theme_announcement(next));
}

pub fn init(ctx: UiContext) -> Result<(), JsValue> {
    let theme = load_theme(&BrowserStorage);
    store_set_theme(&ctx.store, theme);
    apply_theme(theme)?;

    // The drawer copy just invokes the same toggle
    for id in [PRIMARY_TOGGLE_ID, DRAWER_TOGGLE_ID] {
        if let Some(button) = dom::by_id(id) {
            dom::listen(&button, "click", move |ev| {
                ev.prevent_default();
                toggle(ctx);
            })?;
        }
    }
    log::debug!("Theme {} applied", theme.as_str());
    Ok(())
}
