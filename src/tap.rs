//! Double-Tap Guard
//!
//! Detects a second touchend inside the double-tap window so the browser's
//! double-tap zoom can be suppressed.

#[derive(Debug, Default, Clone, Copy)]
pub struct DoubleTapGuard {
    last_touch_end: Option<f64>,
}

impl DoubleTapGuard {
    /// Record a touchend at `now_ms`; returns true when it should be suppressed
    pub fn register(&mut self, now_ms: f64, window_ms: f64) -> bool {
        let suppress = matches!(self.last_touch_end, Some(last) if now_ms - last <= window_ms);
        self.last_touch_end = Some(now_ms);
        suppress
    }
}
