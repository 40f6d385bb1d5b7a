// Host-side tests for the page contract the web front-end relies on.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod toggle {
    include!("../src/toggle.rs");
}

use constants::*;
use toggle::next_theme;
use scales_core::Theme;

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::from_name(DEFAULT_THEME), Theme::Light);
    assert_eq!(Theme::Light.as_str(), DEFAULT_THEME);
}

#[test]
fn toggle_ids_are_distinct_and_unprefixed() {
    assert_ne!(THEME_TOGGLE_IDS[0], THEME_TOGGLE_IDS[1]);
    for id in THEME_TOGGLE_IDS.iter().chain([CONTAINER_ID, CANVAS_ID].iter()) {
        assert!(!id.starts_with('#'), "{id} must be a bare element id");
        assert!(!id.is_empty());
    }
}

#[test]
fn toggling_a_stored_value_always_lands_on_a_known_name() {
    for stored in ["light", "dark", "", "Light", "sepia"] {
        let next = Theme::from_name(stored).toggled();
        assert!(matches!(next.as_str(), "light" | "dark"));
    }
    assert_eq!(Theme::from_name("light").toggled(), Theme::Dark);
    assert_eq!(Theme::from_name("dark").toggled(), Theme::Light);
}

#[test]
fn repeated_toggles_alternate_from_the_document_attribute() {
    // Nothing is persisted between clicks; only the attribute carries state.
    let mut attribute = DEFAULT_THEME.to_string();
    let mut seen = Vec::new();
    for _ in 0..4 {
        let next = next_theme(Some(attribute.as_str()));
        attribute = next.as_str().to_string();
        seen.push(next);
    }
    assert_eq!(seen, [Theme::Dark, Theme::Light, Theme::Dark, Theme::Light]);
}

#[test]
fn missing_attribute_toggles_away_from_the_default() {
    assert_eq!(next_theme(None), Theme::from_name(DEFAULT_THEME).toggled());
    assert_eq!(next_theme(Some("sepia")), Theme::Light);
}

#[test]
fn theme_attribute_matches_bootstrap() {
    assert_eq!(THEME_ATTRIBUTE, "data-bs-theme");
    assert_eq!(THEME_STORAGE_KEY, "theme");
}
