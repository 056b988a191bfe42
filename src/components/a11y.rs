//! Accessibility Helpers
//!
//! Live region, skip link, dropdown keyboard activation and modal initial focus.

use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, KeyboardEvent};

use crate::context::UiContext;
use crate::dom::{self, FOCUSABLE_SELECTOR};
use crate::store::store_announcement;

pub const LIVE_REGION_ID: &str = "live-region";

const SKIP_LINK_HIDDEN_TOP: &str = "-40px";
const SKIP_LINK_VISIBLE_TOP: &str = "6px";

fn skip_link_style(top: &str) -> String {
    format!(
        "position: absolute; top: {}; left: 6px; z-index: 10000; color: white; \
         background: #000; padding: 8px 16px; text-decoration: none; border-radius: 4px;",
        top
    )
}

/// Polite live region bound to the store's announcement
pub fn mount_live_region(ctx: UiContext) {
    let store = ctx.store;
    mount_to_body(move || {
        view! {
            <div id=LIVE_REGION_ID class="sr-only" aria-live="polite" aria-atomic="true">
                {move || store_announcement(&store)}
            </div>
        }
    });
}

/// Skip link inserted as the first child of `<body>`
pub fn insert_skip_link() -> Result<(), JsValue> {
    let Some(doc) = dom::document() else {
        return Ok(());
    };
    let Some(body) = doc.body() else {
        return Ok(());
    };
    if doc.query_selector(".skip-link")?.is_some() {
        return Ok(());
    }

    let host = doc.create_element("div")?;
    host.set_class_name("skip-link-host");
    body.insert_before(&host, body.first_child().as_ref())?;
    let host: HtmlElement = host.dyn_into().map_err(JsValue::from)?;

    let (top, set_top) = signal(SKIP_LINK_HIDDEN_TOP);
    leptos::mount::mount_to(host, move || {
        view! {
            <a
                href="#main-content"
                class="skip-link sr-only sr-only-focusable"
                style=move || skip_link_style(top.get())
                on:focus=move |_| set_top.set(SKIP_LINK_VISIBLE_TOP)
                on:blur=move |_| set_top.set(SKIP_LINK_HIDDEN_TOP)
            >
                "Skip to main content"
            </a>
        }
    })
    .forget();
    Ok(())
}

/// Enter / Space open dropdowns from the keyboard
fn init_dropdowns() -> Result<(), JsValue> {
    for dropdown in dom::query_all(".dropdown") {
        let toggle = dropdown.query_selector(".dropdown-toggle")?;
        let menu = dropdown.query_selector(".dropdown-menu")?;
        let (Some(toggle), Some(_)) = (toggle, menu) else {
            continue;
        };
        let target = toggle.clone();
        dom::listen(&toggle, "keydown", move |ev| {
            let Some(key_ev) = ev.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let key = key_ev.key();
            if key == "Enter" || key == " " {
                ev.prevent_default();
                dom::click(&target);
            }
        })?;
    }
    Ok(())
}

/// Focus the first focusable element when a modal is shown
fn init_modals() -> Result<(), JsValue> {
    for modal in dom::query_all(".modal") {
        let target = modal.clone();
        dom::listen(&modal, "shown.bs.modal", move |_| {
            if let Some(first) = dom::query_all_in(&target, FOCUSABLE_SELECTOR).first() {
                dom::focus(first);
            }
        })?;
    }
    Ok(())
}

pub fn init() -> Result<(), JsValue> {
    insert_skip_link()?;
    init_dropdowns()?;
    init_modals()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_link_style_positions() {
        assert!(skip_link_style(SKIP_LINK_HIDDEN_TOP).contains("top: -40px;"));
        assert!(skip_link_style(SKIP_LINK_VISIBLE_TOP).contains("top: 6px;"));
    }
}
