//! Enhancement Configuration
//!
//! Tunable thresholds and timings. Pages may override any of them through a
//! `window.WorkshopMobileConfig` object or a `data-mobile-config` JSON
//! attribute on `<body>`; the global object wins.

use leptos_swipe::SwipeConfig;
use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const CONFIG_GLOBAL: &str = "WorkshopMobileConfig";
pub const CONFIG_ATTRIBUTE: &str = "data-mobile-config";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnhanceConfig {
    /// Horizontal distance a drawer swipe must exceed
    pub swipe_threshold_px: i32,
    /// Edge zone where an opening swipe must start
    pub swipe_edge_px: i32,
    /// Scroll offset below which the navbar never hides
    pub navbar_hide_offset_px: f64,
    /// Window for double-tap zoom suppression
    pub double_tap_window_ms: f64,
    /// Submit buttons are re-enabled after this delay
    pub submit_fallback_ms: u32,
    /// Live region text is cleared after this delay
    pub announce_clear_ms: u32,
    pub log_level: LogLevel,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: 50,
            swipe_edge_px: 24,
            navbar_hide_offset_px: 100.0,
            double_tap_window_ms: 300.0,
            submit_fallback_ms: 5_000,
            announce_clear_ms: 1_000,
            log_level: LogLevel::Warn,
        }
    }
}

impl EnhanceConfig {
    pub fn swipe(&self) -> SwipeConfig {
        SwipeConfig {
            threshold_px: self.swipe_threshold_px,
            edge_px: self.swipe_edge_px,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    pub fn from_js(value: JsValue) -> Result<Self, String> {
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }
}

/// Read page overrides. `Ok(default)` when the page provides none.
pub fn load() -> Result<EnhanceConfig, String> {
    let Some(window) = web_sys::window() else {
        return Ok(EnhanceConfig::default());
    };

    let global = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
    if !global.is_undefined() && !global.is_null() {
        return EnhanceConfig::from_js(global).map_err(|e| format!("{}: {}", CONFIG_GLOBAL, e));
    }

    let attribute = window
        .document()
        .and_then(|doc| doc.body())
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    match attribute {
        Some(raw) => EnhanceConfig::from_json(&raw).map_err(|e| format!("{}: {}", CONFIG_ATTRIBUTE, e)),
        None => Ok(EnhanceConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(EnhanceConfig::from_json("{}").unwrap(), EnhanceConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = EnhanceConfig::from_json(r#"{"swipeThresholdPx": 80, "logLevel": "debug", "unknown": 1}"#).unwrap();
        assert_eq!(config.swipe_threshold_px, 80);
        assert_eq!(config.swipe_edge_px, 24);
        assert_eq!(config.navbar_hide_offset_px, 100.0);
        assert_eq!(config.log_level.to_filter(), LevelFilter::Debug);
        assert_eq!(config.swipe(), SwipeConfig { threshold_px: 80, edge_px: 24 });
    }

    #[test]
    fn test_integer_accepted_for_float_fields() {
        let config = EnhanceConfig::from_json(r#"{"navbarHideOffsetPx": 64, "doubleTapWindowMs": 250}"#).unwrap();
        assert_eq!(config.navbar_hide_offset_px, 64.0);
        assert_eq!(config.double_tap_window_ms, 250.0);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(EnhanceConfig::from_json(r#"{"swipeThresholdPx": "wide"}"#).is_err());
        assert!(EnhanceConfig::from_json("not json").is_err());
    }
}
