#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_defaults_to_light_outside_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_returns_the_other_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn apply_is_callable_without_a_document() {
    apply(Theme::Dark);
    apply(Theme::Light);
}
