//! UI Context
//!
//! Process-wide state handed to every initializer, also provided via the
//! Leptos Context API for the injected views and page integration globals.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::EnhanceConfig;
use crate::store::{self, UiState, UiStore};

#[derive(Clone, Copy)]
pub struct UiContext {
    /// Reactive UI state
    pub store: UiStore,
    /// Tunables for this page view
    pub config: EnhanceConfig,
}

impl UiContext {
    pub fn new(config: EnhanceConfig) -> Self {
        Self {
            store: Store::new(UiState::default()),
            config,
        }
    }

    /// Announce a message through the live region, clearing it after the configured delay
    pub fn announce(&self, message: &str) {
        let seq = store::store_begin_announcement(&self.store, message);
        let ui_store = self.store;
        Timeout::new(self.config.announce_clear_ms, move || {
            store::store_clear_announcement(&ui_store, seq);
        })
        .forget();
    }
}

/// Get the UI context provided at start-up
pub fn use_ui_context() -> Option<UiContext> {
    use_context::<UiContext>()
}
