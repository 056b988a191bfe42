//! Dark Mode Preference
//!
//! Loading and flipping the persisted theme flag. Storage sits behind a
//! small trait so the toggle rules run without a browser.

use crate::models::Theme;

/// localStorage key holding "dark" or "light"
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class applied to the document root in dark mode
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Key-value preference storage
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Browser `localStorage`
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = Self::storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage.set_item(key, value).map_err(|e| format!("{:?}", e))
    }
}

/// Read the persisted theme (light when absent or unreadable)
pub fn load_theme(storage: &impl PreferenceStorage) -> Theme {
    Theme::from_stored(storage.get(THEME_STORAGE_KEY).as_deref())
}

/// Flip the theme and persist the new value.
///
/// The new theme is returned even when it could not be stored.
pub fn toggle_theme(current: Theme, storage: &impl PreferenceStorage) -> Theme {
    let next = current.toggled();
    if let Err(e) = storage.set(THEME_STORAGE_KEY, next.as_str()) {
        log::warn!("Could not persist theme preference: {}", e);
    }
    next
}

pub fn theme_announcement(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "Dark mode on"
    } else {
        "Dark mode off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        values: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl PreferenceStorage for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            if self.read_only {
                return Err("quota exceeded".to_string());
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_load_defaults_to_light() {
        let storage = MemoryStorage::default();
        assert_eq!(load_theme(&storage), Theme::Light);
    }

    #[test]
    fn test_load_persisted_dark() {
        let storage = MemoryStorage::default();
        storage.set(THEME_STORAGE_KEY, "dark").unwrap();
        assert_eq!(load_theme(&storage), Theme::Dark);
    }

    #[test]
    fn test_toggle_writes_opposite_value() {
        let storage = MemoryStorage::default();
        let next = toggle_theme(Theme::Light, &storage);
        assert_eq!(next, Theme::Dark);
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        let next = toggle_theme(next, &storage);
        assert_eq!(next, Theme::Light);
        assert_eq!(storage.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
        // Reload sees the last written value
        assert_eq!(load_theme(&storage), Theme::Light);
    }

    #[test]
    fn test_toggle_survives_storage_failure() {
        let storage = MemoryStorage { read_only: true, ..Default::default() };
        assert_eq!(toggle_theme(Theme::Dark, &storage), Theme::Light);
        assert_eq!(storage.get(THEME_STORAGE_KEY), None);
    }

    #[test]
    fn test_announcement() {
        assert_eq!(theme_announcement(Theme::Dark), "Dark mode on");
        assert_eq!(theme_announcement(Theme::Light), "Dark mode off");
    }
}
