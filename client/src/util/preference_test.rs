use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn read_defaults_to_light_when_nothing_stored() {
    let store = PreferenceStore::new(MemoryStorage::new());
    assert_eq!(store.read(), Theme::Light);
}

#[test]
fn write_then_fresh_read_round_trips_both_values() {
    for theme in [Theme::Light, Theme::Dark] {
        let backend = MemoryStorage::new();
        PreferenceStore::new(backend.clone()).write(theme);

        let reloaded = PreferenceStore::new(backend);
        assert_eq!(reloaded.read(), theme);
    }
}

#[test]
fn write_stores_literal_value_under_theme_key() {
    let backend = MemoryStorage::new();
    let store = PreferenceStore::new(backend.clone());
    store.write(Theme::Dark);
    assert_eq!(backend.raw("theme").as_deref(), Some("dark"));
    store.write(Theme::Light);
    assert_eq!(backend.raw("theme").as_deref(), Some("light"));
}

#[test]
fn repeated_reads_agree() {
    let backend = MemoryStorage::new();
    backend.set_item(STORAGE_KEY, "dark").unwrap();
    let store = PreferenceStore::new(backend);
    assert_eq!(store.read(), store.read());
    assert_eq!(store.read(), Theme::Dark);
}

#[test]
fn unavailable_storage_reads_light_and_ignores_writes() {
    let backend = MemoryStorage::unavailable();
    let store = PreferenceStore::new(backend.clone());
    store.write(Theme::Dark);
    assert_eq!(store.read(), Theme::Light);
    assert_eq!(backend.raw(STORAGE_KEY), None);
}

#[test]
fn unrecognized_stored_value_reads_light() {
    let backend = MemoryStorage::new();
    backend.set_item(STORAGE_KEY, "sepia").unwrap();
    assert_eq!(PreferenceStore::new(backend).read(), Theme::Light);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_preference_fails_soft_outside_browser() {
    let store = PreferenceStore::<LocalStorage>::default();
    store.write(Theme::Dark);
    assert_eq!(store.read(), Theme::Light);
}
