//! Touch Feedback
//!
//! `touching` class while a finger is down, and double-tap zoom suppression.

use wasm_bindgen::JsValue;

use crate::context::UiContext;
use crate::dom;
use crate::tap::DoubleTapGuard;

const INTERACTIVE_SELECTOR: &str = "button, .btn, a, .nav-link, .dropdown-item";
const TOUCHING_CLASS: &str = "touching";

pub fn init(ctx: UiContext) -> Result<(), JsValue> {
    let elements = dom::query_all(INTERACTIVE_SELECTOR);
    for element in &elements {
        let target = element.clone();
        dom::listen_passive(element, "touchstart", move |_| {
            let _ = dom::set_class(&target, TOUCHING_CLASS, true);
        })?;
        for event in ["touchend", "touchcancel"] {
            let target = element.clone();
            dom::listen_passive(element, event, move |_| {
                let _ = dom::set_class(&target, TOUCHING_CLASS, false);
            })?;
        }
    }

    if let Some(doc) = dom::document() {
        let mut guard = DoubleTapGuard::default();
        let window_ms = ctx.config.double_tap_window_ms;
        // Not passive: needs preventDefault
        dom::listen(&doc, "touchend", move |ev| {
            if guard.register(js_sys::Date::now(), window_ms) {
                ev.prevent_default();
            }
        })?;
    }

    log::debug!("Touch feedback on {} element(s)", elements.len());
    Ok(())
}
