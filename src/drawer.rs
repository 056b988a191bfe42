//! Drawer State Machine
//!
//! Pure transition rules for the off-canvas navigation drawer, plus the
//! focus-trap and menu-key helpers used while it is open. DOM work lives in
//! `components::drawer`, which applies the returned effects in order.

use leptos_swipe::{Swipe, SwipeDirection};

use crate::models::DrawerState;

pub const OPENED_MESSAGE: &str = "Navigation menu opened";
pub const CLOSED_MESSAGE: &str = "Navigation menu closed";

/// Inputs that can move the drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEvent {
    /// A toggle control was activated
    Toggle,
    /// A close control was activated
    CloseControl,
    /// The backdrop was clicked
    Backdrop,
    /// Escape was pressed
    Escape,
    /// A horizontal swipe was recognised
    Swipe(Swipe),
    /// `mobileNav.open()`
    Open,
    /// `mobileNav.close()`
    Close,
}

/// Side effects to apply after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerEffect {
    RememberFocus,
    LockScroll,
    Show,
    FocusFirst,
    Hide,
    UnlockScroll,
    RestoreFocus,
    Announce(&'static str),
}

const OPEN_EFFECTS: [DrawerEffect; 5] = [
    DrawerEffect::RememberFocus,
    DrawerEffect::LockScroll,
    DrawerEffect::Show,
    DrawerEffect::FocusFirst,
    DrawerEffect::Announce(OPENED_MESSAGE),
];

const CLOSE_EFFECTS: [DrawerEffect; 4] = [
    DrawerEffect::Hide,
    DrawerEffect::UnlockScroll,
    DrawerEffect::RestoreFocus,
    DrawerEffect::Announce(CLOSED_MESSAGE),
];

/// Compute the next state and the effects to apply.
///
/// Events that do not apply to the current state leave it unchanged with no effects.
pub fn transition(state: DrawerState, event: DrawerEvent) -> (DrawerState, Vec<DrawerEffect>) {
    let next = match (state, event) {
        (DrawerState::Closed, DrawerEvent::Toggle | DrawerEvent::Open) => Some(DrawerState::Open),
        (DrawerState::Closed, DrawerEvent::Swipe(swipe))
            if swipe.direction == SwipeDirection::Right && swipe.from_left_edge =>
        {
            Some(DrawerState::Open)
        }
        (
            DrawerState::Open,
            DrawerEvent::Toggle
            | DrawerEvent::CloseControl
            | DrawerEvent::Backdrop
            | DrawerEvent::Escape
            | DrawerEvent::Close,
        ) => Some(DrawerState::Closed),
        (DrawerState::Open, DrawerEvent::Swipe(swipe)) if swipe.direction == SwipeDirection::Left => {
            Some(DrawerState::Closed)
        }
        _ => None,
    };

    match next {
        Some(DrawerState::Open) => (DrawerState::Open, OPEN_EFFECTS.to_vec()),
        Some(DrawerState::Closed) => (DrawerState::Closed, CLOSE_EFFECTS.to_vec()),
        None => (state, Vec::new()),
    }
}

/// Keep only the candidates the user can actually reach.
///
/// Elements inside a collapsed accordion are still matched by the focusable
/// selector but the browser skips them, so the trap must not count them.
pub fn reachable<T>(candidates: Vec<T>, is_hidden: impl Fn(&T) -> bool) -> Vec<T> {
    candidates.into_iter().filter(|el| !is_hidden(el)).collect()
}

/// Element to focus when the drawer closes.
///
/// A recorded page root (`<body>`, `<html>`) means nothing was focused, so
/// the fallback (the toggle control) is used instead.
pub fn restore_target<T: PartialEq>(recorded: Option<T>, page_roots: &[T], fallback: Option<T>) -> Option<T> {
    recorded.filter(|el| !page_roots.contains(el)).or(fallback)
}

/// Where Tab should send focus inside the open drawer.
///
/// `current` is the index of the focused element among the panel's focusable
/// elements (`None` when focus is outside the panel). Returns `None` when the
/// browser's default Tab order should apply.
pub fn trap_tab(current: Option<usize>, count: usize, shift: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match current {
        None => Some(if shift { count - 1 } else { 0 }),
        Some(0) if shift => Some(count - 1),
        Some(i) if !shift && i + 1 >= count => Some(0),
        _ => None,
    }
}

/// Keyboard movement among drawer menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Next,
    Previous,
    First,
    Last,
}

impl MenuKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(MenuKey::Next),
            "ArrowUp" => Some(MenuKey::Previous),
            "Home" => Some(MenuKey::First),
            "End" => Some(MenuKey::Last),
            _ => None,
        }
    }
}

/// Index of the menu item to focus (cyclic for arrows).
///
/// `None` when focus is not on a menu item, so the key keeps its default
/// behaviour in inputs and selects.
pub fn menu_target(key: MenuKey, current: Option<usize>, count: usize) -> Option<usize> {
    let current = current?;
    if count == 0 {
        return None;
    }
    let target = match key {
        MenuKey::Next => (current + 1) % count,
        MenuKey::Previous => (current + count - 1) % count,
        MenuKey::First => 0,
        MenuKey::Last => count - 1,
    };
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_swipe::{detect_swipe, SwipeConfig};

    fn swipe(direction: SwipeDirection, from_left_edge: bool) -> DrawerEvent {
        DrawerEvent::Swipe(Swipe { direction, from_left_edge })
    }

    #[test]
    fn test_toggle_opens_then_closes() {
        let (state, effects) = transition(DrawerState::Closed, DrawerEvent::Toggle);
        assert_eq!(state, DrawerState::Open);
        assert_eq!(effects.first(), Some(&DrawerEffect::RememberFocus));
        assert!(effects.contains(&DrawerEffect::Announce(OPENED_MESSAGE)));

        let (state, effects) = transition(state, DrawerEvent::Toggle);
        assert_eq!(state, DrawerState::Closed);
        assert!(effects.contains(&DrawerEffect::RestoreFocus));
        assert!(effects.contains(&DrawerEffect::Announce(CLOSED_MESSAGE)));
    }

    #[test]
    fn test_close_events_ignored_when_closed() {
        for event in [DrawerEvent::CloseControl, DrawerEvent::Backdrop, DrawerEvent::Escape, DrawerEvent::Close] {
            let (state, effects) = transition(DrawerState::Closed, event);
            assert_eq!(state, DrawerState::Closed);
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn test_every_close_event_closes() {
        for event in [DrawerEvent::CloseControl, DrawerEvent::Backdrop, DrawerEvent::Escape, DrawerEvent::Close] {
            let (state, effects) = transition(DrawerState::Open, event);
            assert_eq!(state, DrawerState::Closed);
            assert_eq!(effects.len(), 4);
        }
    }

    #[test]
    fn test_open_is_noop_when_open() {
        let (state, effects) = transition(DrawerState::Open, DrawerEvent::Open);
        assert_eq!(state, DrawerState::Open);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_edge_swipe_opens() {
        let (state, _) = transition(DrawerState::Closed, swipe(SwipeDirection::Right, true));
        assert_eq!(state, DrawerState::Open);
        // Starting away from the edge does nothing
        let (state, _) = transition(DrawerState::Closed, swipe(SwipeDirection::Right, false));
        assert_eq!(state, DrawerState::Closed);
    }

    #[test]
    fn test_left_swipe_closes_only_when_open() {
        let (state, _) = transition(DrawerState::Open, swipe(SwipeDirection::Left, false));
        assert_eq!(state, DrawerState::Closed);
        let (state, effects) = transition(DrawerState::Closed, swipe(SwipeDirection::Left, true));
        assert_eq!(state, DrawerState::Closed);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_swipe_distance_threshold() {
        let config = SwipeConfig::default();
        // 60px from the edge opens
        let found = detect_swipe((5, 200), (65, 200), config).map(DrawerEvent::Swipe).unwrap();
        assert_eq!(transition(DrawerState::Closed, found).0, DrawerState::Open);
        // 40px is not a swipe at all
        assert!(detect_swipe((5, 200), (45, 200), config).is_none());
    }

    #[test]
    fn test_trap_tab_wraps() {
        // Tab from last goes to first
        assert_eq!(trap_tab(Some(3), 4, false), Some(0));
        // Shift+Tab from first goes to last
        assert_eq!(trap_tab(Some(0), 4, true), Some(3));
        // Middle of the list uses default order
        assert_eq!(trap_tab(Some(1), 4, false), None);
        assert_eq!(trap_tab(Some(1), 4, true), None);
    }

    #[test]
    fn test_trap_tab_focus_outside_panel() {
        assert_eq!(trap_tab(None, 3, false), Some(0));
        assert_eq!(trap_tab(None, 3, true), Some(2));
        assert_eq!(trap_tab(None, 0, false), None);
    }

    #[test]
    fn test_trap_tab_single_element() {
        assert_eq!(trap_tab(Some(0), 1, false), Some(0));
        assert_eq!(trap_tab(Some(0), 1, true), Some(0));
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(MenuKey::from_key("ArrowDown"), Some(MenuKey::Next));
        assert_eq!(MenuKey::from_key("Tab"), None);

        assert_eq!(menu_target(MenuKey::Next, Some(2), 3), Some(0));
        assert_eq!(menu_target(MenuKey::Previous, Some(0), 3), Some(2));
        assert_eq!(menu_target(MenuKey::First, Some(2), 3), Some(0));
        assert_eq!(menu_target(MenuKey::Last, Some(0), 3), Some(2));
    }

    #[test]
    fn test_menu_keys_ignored_off_menu() {
        // Focus on an input or select inside the panel
        for key in [MenuKey::Next, MenuKey::Previous, MenuKey::First, MenuKey::Last] {
            assert_eq!(menu_target(key, None, 3), None);
        }
        assert_eq!(menu_target(MenuKey::Last, None, 0), None);
    }

    #[test]
    fn test_trap_skips_hidden_last_element() {
        // [A, B, C] where C sits in a collapsed accordion
        let panel = vec![("a", false), ("b", false), ("c", true)];
        let focusables = reachable(panel, |(_, hidden)| *hidden);
        assert_eq!(focusables.len(), 2);
        // Tab on B, the last element the user can reach, wraps to A
        let current = focusables.iter().position(|(name, _)| *name == "b");
        assert_eq!(trap_tab(current, focusables.len(), false), Some(0));
        // Shift+Tab on A wraps to B, not the hidden C
        assert_eq!(trap_tab(Some(0), focusables.len(), true), Some(1));
    }

    #[test]
    fn test_first_focus_skips_hidden() {
        let panel = vec![("accordion-link", true), ("home", false)];
        let focusables = reachable(panel, |(_, hidden)| *hidden);
        assert_eq!(focusables.first().map(|(name, _)| *name), Some("home"));
    }

    #[test]
    fn test_restore_target_ignores_page_roots() {
        let roots = ["body", "html"];
        assert_eq!(restore_target(Some("body"), &roots, Some("toggle")), Some("toggle"));
        assert_eq!(restore_target(Some("html"), &roots, Some("toggle")), Some("toggle"));
        assert_eq!(restore_target(None, &roots, Some("toggle")), Some("toggle"));
        assert_eq!(restore_target(Some("search"), &roots, Some("toggle")), Some("search"));
        assert_eq!(restore_target(Some("body"), &roots, None), None);
    }
}
