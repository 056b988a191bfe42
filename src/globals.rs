//! Page Integration Globals
//!
//! Small JS objects for inline scripts in page templates:
//! `window.WorkshopMobile`, `window.mobileNav` and `window.bottomNav`.
//! An object already defined under the same name is left untouched.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::components::{bottom_nav, drawer, forms};
use crate::context::use_ui_context;
use crate::drawer::DrawerEvent;

fn install<F>(name: &str, build: F) -> Result<(), JsValue>
where
    F: FnOnce(&Object) -> Result<(), JsValue>,
{
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let key = JsValue::from_str(name);
    let existing = Reflect::get(&window, &key)?;
    if !existing.is_undefined() && !existing.is_null() {
        log::debug!("window.{} already defined, keeping it", name);
        return Ok(());
    }
    let api = Object::new();
    build(&api)?;
    Reflect::set(&window, &key, &api)?;
    Ok(())
}

fn method(api: &Object, name: &str, function: JsValue) -> Result<(), JsValue> {
    Reflect::set(api, &JsValue::from_str(name), &function).map(|_| ())
}

/// Install all globals; must run inside the owner that provides the UI context
pub fn install_all() -> Result<(), JsValue> {
    let Some(ctx) = use_ui_context() else {
        log::warn!("UI context missing, page globals not installed");
        return Ok(());
    };

    install("WorkshopMobile", |api| {
        let announce = Closure::<dyn Fn(JsValue)>::new(move |message: JsValue| {
            if let Some(message) = message.as_string() {
                ctx.announce(&message);
            }
        });
        method(api, "announceToScreenReader", announce.into_js_value())?;

        let validate = Closure::<dyn Fn(JsValue) -> bool>::new(move |field: JsValue| {
            match field.dyn_into::<Element>() {
                Ok(field) => forms::validate_field(ctx, &field),
                Err(_) => false,
            }
        });
        method(api, "validateField", validate.into_js_value())?;

        let recent_logs = Closure::<dyn Fn() -> Array>::new(|| {
            console_logger::recent_lines().into_iter().map(JsValue::from).collect::<Array>()
        });
        method(api, "recentLogs", recent_logs.into_js_value())
    })?;

    install("mobileNav", |api| {
        let open = Closure::<dyn Fn()>::new(move || drawer::dispatch(ctx, DrawerEvent::Open));
        method(api, "open", open.into_js_value())?;
        let close = Closure::<dyn Fn()>::new(move || drawer::dispatch(ctx, DrawerEvent::Close));
        method(api, "close", close.into_js_value())?;
        let toggle = Closure::<dyn Fn()>::new(move || drawer::dispatch(ctx, DrawerEvent::Toggle));
        method(api, "toggle", toggle.into_js_value())?;
        let is_open = Closure::<dyn Fn() -> bool>::new(move || drawer::is_open(ctx));
        method(api, "isOpen", is_open.into_js_value())
    })?;

    install("bottomNav", |api| {
        let set_active = Closure::<dyn Fn(JsValue)>::new(move |key: JsValue| {
            let Some(key) = key.as_string() else {
                return;
            };
            if let Err(e) = bottom_nav::set_active(&key) {
                log::warn!("bottomNav.setActive failed: {:?}", e);
            }
        });
        method(api, "setActive", set_active.into_js_value())
    })
}
