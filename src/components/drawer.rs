//! Navigation Drawer Component
//!
//! Binds the server-rendered drawer markup to the state machine in
//! `crate::drawer` and applies its effects.

use std::cell::RefCell;

use leptos_swipe::{bind_global_swipe, create_swipe_signals};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::context::UiContext;
use crate::dom::{self, FOCUSABLE_SELECTOR};
use crate::drawer::{menu_target, reachable, restore_target, trap_tab, transition, DrawerEffect, DrawerEvent, MenuKey};
use crate::models::DrawerState;
use crate::store::{store_drawer, store_set_drawer};

pub const PANEL_ID: &str = "mobile-nav-drawer";
pub const BACKDROP_ID: &str = "mobile-nav-backdrop";
const TOGGLE_SELECTOR: &str = "[data-drawer-toggle]";
const CLOSE_SELECTOR: &str = "[data-drawer-close]";
const MENU_ITEM_SELECTOR: &str = "[role=\"menuitem\"]";
const ACCORDION_SELECTOR: &str = "[data-accordion-toggle]";
const HIDDEN_SELECTOR: &str = "[hidden], [aria-hidden=\"true\"]";

thread_local! {
    /// Element focused before the drawer opened
    static RETURN_FOCUS: RefCell<Option<Element>> = const { RefCell::new(None) };
}

/// Drawer elements, looked up on demand
struct DrawerElements {
    panel: Element,
    backdrop: Option<Element>,
    toggles: Vec<Element>,
}

impl DrawerElements {
    fn find() -> Option<Self> {
        Some(Self {
            panel: dom::by_id(PANEL_ID)?,
            backdrop: dom::by_id(BACKDROP_ID),
            toggles: dom::query_all(TOGGLE_SELECTOR),
        })
    }

    /// Hidden by a collapsed section somewhere below the panel
    fn is_hidden(&self, el: &Element) -> bool {
        match el.closest(HIDDEN_SELECTOR) {
            Ok(Some(ancestor)) => ancestor != self.panel,
            _ => false,
        }
    }

    fn focusables(&self) -> Vec<Element> {
        reachable(dom::query_all_in(&self.panel, FOCUSABLE_SELECTOR), |el| self.is_hidden(el))
    }

    fn menu_items(&self) -> Vec<Element> {
        reachable(dom::query_all_in(&self.panel, MENU_ITEM_SELECTOR), |el| self.is_hidden(el))
    }

    fn set_visible(&self, visible: bool) -> Result<(), JsValue> {
        dom::set_class(&self.panel, "is-open", visible)?;
        self.panel.set_attribute("aria-hidden", if visible { "false" } else { "true" })?;
        if let Some(backdrop) = &self.backdrop {
            dom::set_class(backdrop, "is-visible", visible)?;
        }
        for toggle in &self.toggles {
            toggle.set_attribute("aria-expanded", if visible { "true" } else { "false" })?;
        }
        Ok(())
    }

    fn apply(&self, ctx: UiContext, effect: DrawerEffect) -> Result<(), JsValue> {
        match effect {
            DrawerEffect::RememberFocus => {
                let previous = dom::active_element().filter(|el| !dom::contains(&self.panel, el));
                RETURN_FOCUS.with(|cell| *cell.borrow_mut() = previous);
            }
            DrawerEffect::LockScroll => {
                if let Some(body) = dom::document().and_then(|doc| doc.body()) {
                    body.style().set_property("overflow", "hidden")?;
                }
            }
            DrawerEffect::UnlockScroll => {
                if let Some(body) = dom::document().and_then(|doc| doc.body()) {
                    body.style().remove_property("overflow")?;
                }
            }
            DrawerEffect::Show => self.set_visible(true)?,
            DrawerEffect::Hide => self.set_visible(false)?,
            DrawerEffect::FocusFirst => match self.focusables().first() {
                Some(first) => dom::focus(first),
                None => dom::focus(&self.panel),
            },
            DrawerEffect::RestoreFocus => {
                let recorded = RETURN_FOCUS.with(|cell| cell.borrow_mut().take());
                let target = restore_target(recorded, &page_roots(), self.toggles.first().cloned());
                if let Some(target) = target {
                    dom::focus(&target);
                }
            }
            DrawerEffect::Announce(message) => ctx.announce(message),
        }
        Ok(())
    }
}

/// `<body>` and `<html>`, reported as active when nothing has focus
fn page_roots() -> Vec<Element> {
    let Some(doc) = dom::document() else {
        return Vec::new();
    };
    let body = doc.body().map(Element::from);
    body.into_iter().chain(doc.document_element()).collect()
}

/// Feed an event to the drawer state machine and apply the resulting effects
pub fn dispatch(ctx: UiContext, event: DrawerEvent) {
    let Some(elements) = DrawerElements::find() else {
        return;
    };
    let current = store_drawer(&ctx.store);
    let (next, effects) = transition(current, event);
    if effects.is_empty() {
        return;
    }
    log::debug!("drawer {:?} -> {:?} on {:?}", current, next, event);
    store_set_drawer(&ctx.store, next);
    for effect in effects {
        if let Err(e) = elements.apply(ctx, effect) {
            log::warn!("Drawer effect {:?} failed: {:?}", effect, e);
        }
    }
}

pub fn is_open(ctx: UiContext) -> bool {
    store_drawer(&ctx.store) == DrawerState::Open
}

fn on_keydown(ctx: UiContext, ev: &KeyboardEvent) {
    if !is_open(ctx) {
        return;
    }
    let Some(elements) = DrawerElements::find() else {
        return;
    };
    let key = ev.key();

    if key == "Escape" {
        ev.prevent_default();
        dispatch(ctx, DrawerEvent::Escape);
        return;
    }

    let active = dom::active_element();

    if key == "Tab" {
        let focusables = elements.focusables();
        let current = dom::index_of(&focusables, active.as_ref());
        if let Some(target) = trap_tab(current, focusables.len(), ev.shift_key()) {
            ev.prevent_default();
            dom::focus(&focusables[target]);
        }
        return;
    }

    if let Some(menu_key) = MenuKey::from_key(&key) {
        let in_panel = active.as_ref().map(|el| dom::contains(&elements.panel, el)).unwrap_or(false);
        if !in_panel {
            return;
        }
        let items = elements.menu_items();
        // Inputs and selects in the panel keep their own arrow keys
        let current = dom::index_of(&items, active.as_ref());
        if let Some(target) = menu_target(menu_key, current, items.len()) {
            ev.prevent_default();
            dom::focus(&items[target]);
        }
    }
}

/// Flip one accordion section; each section is independent
fn toggle_accordion(toggle: &Element) -> Result<(), JsValue> {
    let expanded = toggle.get_attribute("aria-expanded").as_deref() == Some("true");
    let next = !expanded;
    toggle.set_attribute("aria-expanded", if next { "true" } else { "false" })?;
    dom::set_class(toggle, "is-expanded", next)?;

    let panel = toggle.get_attribute("aria-controls").and_then(|id| dom::by_id(&id));
    if let Some(panel) = panel {
        if next {
            panel.remove_attribute("hidden")?;
        } else {
            panel.set_attribute("hidden", "")?;
        }
    }
    Ok(())
}

pub fn init(ctx: UiContext) -> Result<(), JsValue> {
    let Some(elements) = DrawerElements::find() else {
        log::debug!("No #{} on this page", PANEL_ID);
        return Ok(());
    };
    elements.set_visible(false)?;

    for toggle in &elements.toggles {
        dom::listen(toggle, "click", move |ev| {
            ev.prevent_default();
            dispatch(ctx, DrawerEvent::Toggle);
        })?;
    }

    for close in dom::query_all(CLOSE_SELECTOR) {
        dom::listen(&close, "click", move |ev| {
            ev.prevent_default();
            dispatch(ctx, DrawerEvent::CloseControl);
        })?;
    }

    if let Some(backdrop) = &elements.backdrop {
        dom::listen(backdrop, "click", move |_| dispatch(ctx, DrawerEvent::Backdrop))?;
    }

    for accordion in dom::query_all_in(&elements.panel, ACCORDION_SELECTOR) {
        let toggle = accordion.clone();
        dom::listen(&accordion, "click", move |ev| {
            ev.prevent_default();
            if let Err(e) = toggle_accordion(&toggle) {
                log::warn!("Accordion toggle failed: {:?}", e);
            }
        })?;
    }

    if let Some(doc) = dom::document() {
        dom::listen(&doc, "keydown", move |ev| {
            if let Some(ev) = ev.dyn_ref::<KeyboardEvent>() {
                on_keydown(ctx, ev);
            }
        })?;
    }

    bind_global_swipe(create_swipe_signals(), ctx.config.swipe(), move |swipe| {
        dispatch(ctx, DrawerEvent::Swipe(swipe));
    });

    // Keep the panel focusable for drawers without focusable children
    if let Some(panel) = elements.panel.dyn_ref::<HtmlElement>() {
        if panel.get_attribute("tabindex").is_none() {
            panel.set_tab_index(-1);
        }
    }

    log::info!("Drawer ready with {} toggle(s)", elements.toggles.len());
    Ok(())
}
