//! Leptos Swipe Utilities
//!
//! Simple horizontal swipe detection for Leptos using touch events.
//! Uses a distance threshold to distinguish a swipe from a tap or a scroll.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Horizontal swipe direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// A recognised swipe gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swipe {
    pub direction: SwipeDirection,
    /// Touch started inside the left edge zone of the viewport
    pub from_left_edge: bool,
}

/// Gesture tuning
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwipeConfig {
    /// Horizontal distance a swipe must exceed
    pub threshold_px: i32,
    /// Width of the left edge zone where edge swipes must start
    pub edge_px: i32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold_px: 50,
            edge_px: 24,
        }
    }
}

/// Classify a touch that moved from `start` to `end` (client coordinates).
///
/// Returns `None` for taps, short moves and mostly-vertical moves.
pub fn detect_swipe(start: (i32, i32), end: (i32, i32), config: SwipeConfig) -> Option<Swipe> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;

    if dx.abs() <= config.threshold_px || dx.abs() <= dy.abs() {
        return None;
    }

    Some(Swipe {
        direction: if dx > 0 { SwipeDirection::Right } else { SwipeDirection::Left },
        from_left_edge: start.0 <= config.edge_px,
    })
}

/// Swipe tracking signals
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Start point of the current touch, if any
    pub start_read: ReadSignal<Option<(i32, i32)>>,
    pub start_write: WriteSignal<Option<(i32, i32)>>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (start_read, start_write) = signal(None::<(i32, i32)>);
    SwipeSignals {
        start_read,
        start_write,
    }
}

fn passive_options() -> web_sys::AddEventListenerOptions {
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    options
}

/// Bind document-level touchstart/touchend handlers and report swipes
pub fn bind_global_swipe<F>(swipe: SwipeSignals, config: SwipeConfig, on_swipe: F)
where
    F: Fn(Swipe) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let on_touchstart = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        // Multi-touch is a pinch, not a swipe
        if ev.touches().length() != 1 {
            swipe.start_write.set(None);
            return;
        }
        if let Some(touch) = ev.touches().get(0) {
            swipe.start_write.set(Some((touch.client_x(), touch.client_y())));
        }
    });

    let on_touchend = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        let Some(start) = swipe.start_read.get_untracked() else {
            return;
        };
        swipe.start_write.set(None);

        let Some(touch) = ev.changed_touches().get(0) else {
            return;
        };
        if let Some(found) = detect_swipe(start, (touch.client_x(), touch.client_y()), config) {
            on_swipe(found);
        }
    });

    let options = passive_options();
    let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        on_touchstart.as_ref().unchecked_ref(),
        &options,
    );
    let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        on_touchend.as_ref().unchecked_ref(),
        &options,
    );
    on_touchstart.forget();
    on_touchend.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_swipe_right_over_threshold() {
        let swipe = detect_swipe((10, 300), (70, 305), SwipeConfig::default()).unwrap();
        assert_eq!(swipe.direction, SwipeDirection::Right);
        assert!(swipe.from_left_edge);
    }

    #[test]
    fn test_short_move_is_not_a_swipe() {
        assert_eq!(detect_swipe((10, 300), (50, 300), SwipeConfig::default()), None);
        // Exactly the threshold does not count
        assert_eq!(detect_swipe((10, 300), (60, 300), SwipeConfig::default()), None);
    }

    #[test]
    fn test_vertical_move_is_not_a_swipe() {
        assert_eq!(detect_swipe((10, 100), (80, 400), SwipeConfig::default()), None);
    }

    #[test]
    fn test_swipe_left_away_from_edge() {
        let swipe = detect_swipe((250, 200), (120, 210), SwipeConfig::default()).unwrap();
        assert_eq!(swipe.direction, SwipeDirection::Left);
        assert!(!swipe.from_left_edge);
    }

    #[test]
    fn test_custom_threshold() {
        let config = SwipeConfig { threshold_px: 30, edge_px: 40 };
        let swipe = detect_swipe((35, 0), (75, 0), config).unwrap();
        assert!(swipe.from_left_edge);
        assert_eq!(swipe.direction, SwipeDirection::Right);
    }
}
