//! Bottom Navigation
//!
//! Active-state switching for the `[data-nav]` items of `.bottom-nav`.

use wasm_bindgen::JsValue;

use crate::dom;

const ITEM_SELECTOR: &str = ".bottom-nav [data-nav]";
const ACTIVE_CLASS: &str = "is-active";

/// `aria-current` value for an item
fn aria_current(active: bool) -> &'static str {
    if active {
        "page"
    } else {
        "false"
    }
}

/// Mark the item with `data-nav == key` active and every other item inactive
pub fn set_active(key: &str) -> Result<(), JsValue> {
    for item in dom::query_all(ITEM_SELECTOR) {
        let active = item.get_attribute("data-nav").as_deref() == Some(key);
        dom::set_class(&item, ACTIVE_CLASS, active)?;
        item.set_attribute("aria-current", aria_current(active))?;
    }
    Ok(())
}

pub fn init() -> Result<(), JsValue> {
    let Some(nav) = dom::query(".bottom-nav") else {
        return Ok(());
    };
    dom::listen(&nav, "click", move |ev| {
        let item = dom::event_element(&ev).and_then(|el| el.closest("[data-nav]").ok().flatten());
        let Some(key) = item.and_then(|el| el.get_attribute("data-nav")) else {
            return;
        };
        if let Err(e) = set_active(&key) {
            log::warn!("Bottom nav update failed: {:?}", e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aria_current() {
        assert_eq!(aria_current(true), "page");
        assert_eq!(aria_current(false), "false");
    }
}
