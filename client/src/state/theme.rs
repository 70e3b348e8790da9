//! Light/dark theme state.
//!
//! DESIGN
//! ======
//! `ThemeController` is the only writer of the active theme. Every
//! transition, including the initial load, applies the document flag and
//! persists the value before returning, so the flag, the stored preference,
//! and the in-memory value never disagree once a call completes.
//!
//! `ThemeContext` is the Leptos-facing handle: a reactive signal for readers
//! plus the controller kept in a `StoredValue`. The controller is created in
//! an effect, so it only ever exists in the browser after hydration.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

use crate::util::document::{DocumentRoot, ModeFlag};
use crate::util::preference::PreferenceStore;
use crate::util::storage::{KeyValueStore, LocalStorage};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}` (expected `light` or `dark`)")]
pub struct ParseThemeError(pub String);

impl Theme {
    /// Literal persisted and written to `data-theme`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Icon for the toggle button: it shows the theme a click switches to.
    #[must_use]
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "/icons/moon.svg",
            Self::Dark => "/icons/sun.svg",
        }
    }

    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Owner of the active theme.
#[derive(Debug)]
pub struct ThemeController<S = LocalStorage, F = DocumentRoot> {
    current: Theme,
    store: PreferenceStore<S>,
    flag: F,
}

impl<S: KeyValueStore, F: ModeFlag> ThemeController<S, F> {
    /// Read the stored preference and apply it.
    pub fn load(store: PreferenceStore<S>, flag: F) -> Self {
        let current = store.read();
        let controller = Self { current, store, flag };
        controller.commit();
        controller
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Flip the theme, apply it, persist it, and return the new value.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.commit();
        log::debug!("theme toggled to {}", self.current);
        self.current
    }

    fn commit(&self) {
        self.flag.set_mode(self.current);
        self.store.write(self.current);
    }
}

/// Theme handle provided through Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    controller: StoredValue<Option<ThemeController>>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeContext {
    #[must_use]
    pub fn new() -> Self {
        Self { theme: RwSignal::new(Theme::default()), controller: StoredValue::new(None) }
    }

    /// Load the browser preference. Later calls are no-ops.
    pub fn init(&self) {
        if self.controller.with_value(Option::is_some) {
            return;
        }
        let controller = ThemeController::load(PreferenceStore::new(LocalStorage), DocumentRoot);
        self.theme.set(controller.theme());
        self.controller.set_value(Some(controller));
    }

    pub fn toggle(&self) {
        if self.controller.with_value(Option::is_none) {
            self.init();
        }
        let mut next = None;
        self.controller.update_value(|c| next = c.as_mut().map(ThemeController::toggle));
        if let Some(theme) = next {
            self.theme.set(theme);
        }
    }

    /// Reactive read of the active theme.
    pub fn get(&self) -> Theme {
        self.theme.get()
    }
}
