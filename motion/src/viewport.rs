//! Coarse viewport classification.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::VIEWPORT_BREAKPOINT_PX;

/// Which preview mode the current window width supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewportClass {
    /// Wide enough for the floating hover preview. Also the server-render default.
    #[default]
    Large,
    /// Narrow (typically touch) screens; previews render inline.
    Small,
}

impl ViewportClass {
    /// `Large` iff `width_px >= 768`. Non-finite widths classify as `Small`.
    #[must_use]
    pub fn classify(width_px: f64) -> Self {
        if width_px >= VIEWPORT_BREAKPOINT_PX { Self::Large } else { Self::Small }
    }

    #[must_use]
    pub fn is_large(self) -> bool {
        self == Self::Large
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Small => "small",
        }
    }
}

/// Remembers the last class so resize storms only surface real changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportClassifier {
    class: ViewportClass,
}

impl ViewportClassifier {
    #[must_use]
    pub fn new(initial: ViewportClass) -> Self {
        Self { class: initial }
    }

    #[must_use]
    pub fn class(&self) -> ViewportClass {
        self.class
    }

    /// Reclassify for a new width, returning the new class only if it changed.
    pub fn observe(&mut self, width_px: f64) -> Option<ViewportClass> {
        let next = ViewportClass::classify(width_px);
        if next == self.class {
            return None;
        }
        self.class = next;
        Some(next)
    }
}
