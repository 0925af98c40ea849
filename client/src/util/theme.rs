//! Theme preference persistence and application.
//!
//! The stored preference wins; otherwise the system `prefers-color-scheme`
//! decides. The chosen theme is written to `data-theme` on `<html>`, which
//! the stylesheet keys off. Outside a browser every function is a no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "folio_theme";

/// Resolve the theme to start with.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::default();
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::parse(&stored) {
                    return theme;
                }
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Switch to the other theme, apply it, and persist it. Returns the new theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, next.as_str());
        }
        log::debug!("theme switched to {}", next.as_str());
    }
    next
}
