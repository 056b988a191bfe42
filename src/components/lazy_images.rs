//! Lazy Images
//!
//! Swaps `data-src` into `src` when an image scrolls into view.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;

fn reveal(img: &Element) -> Result<(), JsValue> {
    if let Some(src) = img.get_attribute("data-src") {
        img.set_attribute("src", &src)?;
    }
    img.class_list().remove_1("lazy")
}

pub fn init() -> Result<(), JsValue> {
    if !dom::has_global("IntersectionObserver") {
        log::debug!("IntersectionObserver unavailable, images load eagerly");
        return Ok(());
    }
    let images = dom::query_all("img[data-src]");
    if images.is_empty() {
        return Ok(());
    }

    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let img = entry.target();
                if let Err(e) = reveal(&img) {
                    log::warn!("Lazy image reveal failed: {:?}", e);
                }
                observer.unobserve(&img);
            }
        },
    );
    let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())?;
    on_intersect.forget();

    for img in &images {
        observer.observe(img);
    }
    log::debug!("Observing {} lazy image(s)", images.len());
    Ok(())
}
