//! UI Components
//!
//! DOM bindings for each enhancement. Every module exposes an `init` that
//! binds listeners to server-rendered markup and does nothing when that
//! markup is absent.

pub mod a11y;
pub mod bottom_nav;
pub mod drawer;
pub mod forms;
pub mod lazy_images;
pub mod motion;
pub mod navbar;
pub mod theme_toggle;
pub mod touch;
