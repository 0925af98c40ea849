use super::*;

#[test]
fn ui_state_defaults_to_light_closed_menu() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.menu_open);
}

#[test]
fn theme_round_trips_through_storage_strings() {
    assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
}

#[test]
fn theme_parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_toggle_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggle_label_names_the_next_theme() {
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
}
