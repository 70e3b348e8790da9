//! Theme preference persistence.
//!
//! Reads and writes the single `theme` key. Every failure mode (storage
//! disabled, quota, garbage value) degrades to the default theme; nothing
//! here returns an error to the caller.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use crate::state::theme::Theme;
use crate::util::storage::{KeyValueStore, LocalStorage};

/// Storage key holding the literal `light` or `dark`.
pub const STORAGE_KEY: &str = "theme";

/// Fail-soft wrapper around a [`KeyValueStore`] for the theme preference.
#[derive(Clone, Debug, Default)]
pub struct PreferenceStore<S = LocalStorage> {
    backend: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Stored theme, or [`Theme::Light`] when absent or unreadable.
    pub fn read(&self) -> Theme {
        match self.backend.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                log::warn!("ignoring stored theme preference: {e}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::warn!("theme preference unreadable, using default: {e}");
                Theme::default()
            }
        }
    }

    /// Best-effort persist. Failures are logged and swallowed.
    pub fn write(&self, theme: Theme) {
        if let Err(e) = self.backend.set_item(STORAGE_KEY, theme.as_str()) {
            log::warn!("theme preference not persisted: {e}");
        }
    }
}
