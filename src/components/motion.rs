//! Reduced Motion
//!
//! Zeroes animation and transition durations when the OS asks for reduced motion.

use wasm_bindgen::JsValue;

use crate::dom;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

const REDUCED_MOTION_CSS: &str = "*, *::before, *::after { \
     animation-duration: 0.01ms !important; \
     animation-iteration-count: 1 !important; \
     transition-duration: 0.01ms !important; }";

pub fn init() -> Result<(), JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    if !dom::has_global("matchMedia") {
        return Ok(());
    }
    let Some(query) = window.match_media(REDUCED_MOTION_QUERY)? else {
        return Ok(());
    };
    if !query.matches() {
        return Ok(());
    }

    let Some(doc) = window.document() else {
        return Ok(());
    };
    let Some(head) = doc.head() else {
        return Ok(());
    };
    let style = doc.create_element("style")?;
    style.set_text_content(Some(REDUCED_MOTION_CSS));
    head.append_child(&style)?;
    log::info!("Reduced motion requested, animations disabled");
    Ok(())
}
