//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DrawerState, Theme};

/// Page-wide UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Current colour scheme
    pub theme: Theme,
    /// Navigation drawer visibility
    pub drawer: DrawerState,
    /// Text shown in the live region
    pub announcement: String,
    /// Bumped on every announcement so stale clear timers can be ignored
    pub announcement_seq: u32,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_theme(store: &UiStore) -> Theme {
    store.theme().get_untracked()
}

pub fn store_set_theme(store: &UiStore, theme: Theme) {
    store.theme().set(theme);
}

pub fn store_drawer(store: &UiStore) -> DrawerState {
    store.drawer().get_untracked()
}

pub fn store_set_drawer(store: &UiStore, state: DrawerState) {
    store.drawer().set(state);
}

/// Tracked read for views bound to the live region
pub fn store_announcement(store: &UiStore) -> String {
    store.announcement().get()
}

/// Replace the live region text; returns the sequence number of this announcement
pub fn store_begin_announcement(store: &UiStore, message: &str) -> u32 {
    let seq = store.announcement_seq().get_untracked().wrapping_add(1);
    store.announcement_seq().set(seq);
    store.announcement().set(message.to_string());
    seq
}

/// Clear the live region unless a newer announcement replaced `seq`
pub fn store_clear_announcement(store: &UiStore, seq: u32) {
    if store.announcement_seq().get_untracked() == seq {
        store.announcement().set(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_clear_keeps_newer_announcement() {
        Owner::new().with(|| {
            let store = Store::new(UiState::default());
            let first = store_begin_announcement(&store, "Saved");
            let second = store_begin_announcement(&store, "Navigation menu opened");
            assert_ne!(first, second);

            // Timer of the first announcement fires after the second began
            store_clear_announcement(&store, first);
            assert_eq!(store.announcement().get_untracked(), "Navigation menu opened");

            store_clear_announcement(&store, second);
            assert_eq!(store.announcement().get_untracked(), "");
        });
    }

    #[test]
    fn test_sequence_wraps() {
        Owner::new().with(|| {
            let store = Store::new(UiState { announcement_seq: u32::MAX, ..Default::default() });
            let seq = store_begin_announcement(&store, "Dark mode enabled");
            assert_eq!(seq, 0);
            store_clear_announcement(&store, seq);
            assert_eq!(store.announcement().get_untracked(), "");
        });
    }
}
