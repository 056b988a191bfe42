//! Navbar Scroll Tracking
//!
//! Decides whether the navbar hides based on scroll direction.

#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollTracker {
    last_scroll_top: f64,
}

impl ScrollTracker {
    /// Feed the current scroll offset; returns true when the navbar should be hidden
    pub fn update(&mut self, scroll_top: f64, hide_offset: f64) -> bool {
        let hidden = scroll_top > self.last_scroll_top && scroll_top > hide_offset;
        self.last_scroll_top = scroll_top;
        hidden
    }
}
