//! Site chrome state (theme, mobile navigation).
//!
//! DESIGN
//! ======
//! Provided once by `App` as an `RwSignal<UiState>` so the header and any
//! page can read or flip it without prop drilling.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Colour scheme applied to the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label for the button that switches away from this theme.
    #[must_use]
    pub fn toggle_label(self) -> String {
        format!("Switch to {} theme", self.toggled().as_str())
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    /// Collapsed navigation menu on narrow screens.
    pub menu_open: bool,
}
