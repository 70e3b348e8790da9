use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::util::preference::STORAGE_KEY;
use crate::util::storage::MemoryStorage;

/// Records every mode flag write, newest last.
#[derive(Clone, Default)]
struct RecordingFlag {
    applied: Rc<RefCell<Vec<Theme>>>,
}

impl RecordingFlag {
    fn last(&self) -> Option<Theme> {
        self.applied.borrow().last().copied()
    }
}

impl ModeFlag for RecordingFlag {
    fn set_mode(&self, theme: Theme) {
        self.applied.borrow_mut().push(theme);
    }
}

fn controller(backend: &MemoryStorage, flag: &RecordingFlag) -> ThemeController<MemoryStorage, RecordingFlag> {
    ThemeController::load(PreferenceStore::new(backend.clone()), flag.clone())
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parses_persisted_literals() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!(" dark\n".parse::<Theme>(), Ok(Theme::Dark));
    assert_eq!("Dark".parse::<Theme>(), Err(ParseThemeError("Dark".to_owned())));
}

#[test]
fn theme_display_matches_as_str() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(theme.to_string(), theme.as_str());
    }
}

#[test]
fn toggle_icon_points_at_the_other_theme() {
    assert_eq!(Theme::Light.toggle_icon(), "/icons/moon.svg");
    assert_eq!(Theme::Dark.toggle_icon(), "/icons/sun.svg");
    assert_ne!(Theme::Light.toggle_label(), Theme::Dark.toggle_label());
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn load_without_stored_value_applies_and_persists_light() {
    let backend = MemoryStorage::new();
    let flag = RecordingFlag::default();
    let ctl = controller(&backend, &flag);

    assert_eq!(ctl.theme(), Theme::Light);
    assert_eq!(flag.last(), Some(Theme::Light));
    assert_eq!(backend.raw(STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn load_applies_stored_dark_preference() {
    let backend = MemoryStorage::new();
    backend.set_item(STORAGE_KEY, "dark").unwrap();
    let flag = RecordingFlag::default();
    let ctl = controller(&backend, &flag);

    assert_eq!(ctl.theme(), Theme::Dark);
    assert_eq!(flag.last(), Some(Theme::Dark));
}

#[test]
fn one_toggle_from_light_is_dark_and_two_is_light() {
    let backend = MemoryStorage::new();
    let flag = RecordingFlag::default();
    let mut ctl = controller(&backend, &flag);

    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(ctl.toggle(), Theme::Light);
}

#[test]
fn applied_persisted_and_in_memory_agree_after_every_toggle() {
    let backend = MemoryStorage::new();
    let flag = RecordingFlag::default();
    let mut ctl = controller(&backend, &flag);

    for n in 1..=7 {
        let theme = ctl.toggle();
        let expected = if n % 2 == 1 { Theme::Dark } else { Theme::Light };
        assert_eq!(theme, expected);
        assert_eq!(ctl.theme(), theme);
        assert_eq!(flag.last(), Some(theme));
        assert_eq!(backend.raw(STORAGE_KEY).as_deref(), Some(theme.as_str()));
    }
}

#[test]
fn toggled_value_survives_reload() {
    let backend = MemoryStorage::new();
    let flag = RecordingFlag::default();
    let mut ctl = controller(&backend, &flag);
    ctl.toggle();

    let reloaded = controller(&backend, &RecordingFlag::default());
    assert_eq!(reloaded.theme(), Theme::Dark);
}

#[test]
fn toggle_still_applies_flag_when_storage_is_unavailable() {
    let backend = MemoryStorage::unavailable();
    let flag = RecordingFlag::default();
    let mut ctl = controller(&backend, &flag);

    assert_eq!(ctl.theme(), Theme::Light);
    assert_eq!(ctl.toggle(), Theme::Dark);
    assert_eq!(flag.last(), Some(Theme::Dark));
    assert_eq!(backend.raw(STORAGE_KEY), None);
}

#[test]
fn every_transition_writes_the_flag_once() {
    let backend = MemoryStorage::new();
    let flag = RecordingFlag::default();
    let mut ctl = controller(&backend, &flag);
    ctl.toggle();
    ctl.toggle();
    assert_eq!(*flag.applied.borrow(), vec![Theme::Light, Theme::Dark, Theme::Light]);
}
