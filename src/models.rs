//! Frontend Models
//!
//! Small value types shared by the enhancement modules.

/// Colour scheme preference (persisted as "dark" / "light")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored value; anything other than "dark" is light
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Off-canvas drawer visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

/// Constraint flags copied out of the browser's `ValidityState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityFlags {
    pub valid: bool,
    pub value_missing: bool,
    pub type_mismatch: bool,
    pub pattern_mismatch: bool,
    pub too_short: bool,
    pub too_long: bool,
}

impl Default for ValidityFlags {
    fn default() -> Self {
        Self {
            valid: true,
            value_missing: false,
            type_mismatch: false,
            pattern_mismatch: false,
            too_short: false,
            too_long: false,
        }
    }
}
