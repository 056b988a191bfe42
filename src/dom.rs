//! DOM Helpers
//!
//! Thin wrappers over web-sys used by the components.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Node, NodeList};

/// Elements that can take keyboard focus
pub const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(elements)
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector).map(elements).unwrap_or_default()
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    el.class_list().toggle_with_force(class, on).map(|_| ())
}

pub fn focus(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}

pub fn click(el: &Element) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.click();
    }
}

pub fn active_element() -> Option<Element> {
    document()?.active_element()
}

/// Whether `el` is `root` or one of its descendants
pub fn contains(root: &Element, el: &Element) -> bool {
    let node: &Node = el;
    root.contains(Some(node))
}

/// Position of `el` in `list`
pub fn index_of(list: &[Element], el: Option<&Element>) -> Option<usize> {
    let el = el?;
    list.iter().position(|candidate| candidate == el)
}

/// Element an event was dispatched to
pub fn event_element(ev: &Event) -> Option<Element> {
    ev.target()?.dyn_into::<Element>().ok()
}

/// Feature check on `window`
pub fn has_global(name: &str) -> bool {
    match web_sys::window() {
        Some(window) => js_sys::Reflect::has(&window, &JsValue::from_str(name)).unwrap_or(false),
        None => false,
    }
}

/// Bind an event listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Same as [`listen`] but registered as passive
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}
