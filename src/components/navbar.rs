//! Top Navbar
//!
//! Hides the navbar while scrolling down and collapses the expanded mobile
//! menu on outside clicks or link clicks.

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::context::UiContext;
use crate::dom;
use crate::scroll::ScrollTracker;

const HIDDEN_CLASS: &str = "navbar-hidden";

fn is_expanded(collapse: &Element) -> bool {
    collapse.class_list().contains("show")
}

fn init_collapse(navbar: &Element) -> Result<(), JsValue> {
    let (Some(toggler), Some(collapse)) = (dom::query(".navbar-toggler"), dom::query(".navbar-collapse")) else {
        return Ok(());
    };

    if let Some(doc) = dom::document() {
        let navbar = navbar.clone();
        let toggler = toggler.clone();
        let collapse = collapse.clone();
        dom::listen(&doc, "click", move |ev| {
            let inside = dom::event_element(&ev).map(|el| dom::contains(&navbar, &el)).unwrap_or(false);
            if !inside && is_expanded(&collapse) {
                dom::click(&toggler);
            }
        })?;
    }

    for link in dom::query_all_in(&collapse, ".nav-link") {
        let toggler = toggler.clone();
        let collapse = collapse.clone();
        dom::listen(&link, "click", move |_| {
            if is_expanded(&collapse) {
                dom::click(&toggler);
            }
        })?;
    }
    Ok(())
}

pub fn init(ctx: UiContext) -> Result<(), JsValue> {
    let Some(navbar) = dom::query(".navbar") else {
        return Ok(());
    };
    init_collapse(&navbar)?;

    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let mut tracker = ScrollTracker::default();
    let hide_offset = ctx.config.navbar_hide_offset_px;
    let scroll_window = window.clone();
    dom::listen_passive(&window, "scroll", move |_| {
        let scroll_top = scroll_window.scroll_y().unwrap_or(0.0);
        let hidden = tracker.update(scroll_top, hide_offset);
        let _ = dom::set_class(&navbar, HIDDEN_CLASS, hidden);
    })
}
