//! Image-reveal widget state: focus, pointer smoothing, and panel presence.
//!
//! DESIGN
//! ======
//! The widget's behaviour lives here as a plain struct so it can be driven by
//! tests without a browser. The component forwards DOM events
//! (`hover_enter`, `leave_container`, `pointer_move`, `resize`) and animation
//! frames (`tick`), then paints whatever `panel()` and
//! `shows_inline_previews()` report.
//!
//! Focus follows a two-state machine, `Idle` / `Previewing(item)`. Entering an
//! item always previews it; only leaving the whole container returns to
//! `Idle`. Moving from one item to another swaps the preview in place.
//!
//! The floating panel exists only on large viewports. Its visibility is a
//! separate [`Presence`] machine so the exit animation can outlive the focus
//! that caused it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use motion::follow::{Point, PointerFollower};
use motion::presence::{Presence, PresenceEvent, PresencePhase};
use motion::viewport::{ViewportClass, ViewportClassifier};

use crate::content::VisualItem;

/// Focus state of the widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    Previewing(u32),
}

/// Everything needed to paint the floating preview for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelFrame {
    pub item: VisualItem,
    /// Smoothed pointer position; the panel's centre.
    pub center: Point,
    pub opacity: f64,
    pub scale: f64,
    pub phase: PresencePhase,
}

#[derive(Clone, Debug)]
pub struct RevealState {
    items: &'static [VisualItem],
    focused: Option<u32>,
    /// Item rendered inside the panel. Lags `focused` while an exit plays out.
    shown: Option<u32>,
    viewport: ViewportClassifier,
    follower: PointerFollower,
    presence: Presence,
    exits_started: u64,
}

impl RevealState {
    /// Widget over `items`, assuming a large viewport until told otherwise.
    #[must_use]
    pub fn new(items: &'static [VisualItem]) -> Self {
        Self::with_viewport(items, ViewportClass::Large)
    }

    #[must_use]
    pub fn with_viewport(items: &'static [VisualItem], class: ViewportClass) -> Self {
        Self {
            items,
            focused: None,
            shown: None,
            viewport: ViewportClassifier::new(class),
            follower: PointerFollower::default(),
            presence: Presence::default(),
            exits_started: 0,
        }
    }

    #[must_use]
    pub fn items(&self) -> &'static [VisualItem] {
        self.items
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.focused.map_or(RevealPhase::Idle, RevealPhase::Previewing)
    }

    #[must_use]
    pub fn focused(&self) -> Option<&'static VisualItem> {
        self.focused.and_then(|key| self.item(key))
    }

    #[must_use]
    pub fn is_focused(&self, key: u32) -> bool {
        self.focused == Some(key)
    }

    #[must_use]
    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport.class()
    }

    /// Number of exit animations started over the widget's lifetime.
    #[must_use]
    pub fn exits_started(&self) -> u64 {
        self.exits_started
    }

    #[must_use]
    pub fn presence_phase(&self) -> PresencePhase {
        self.presence.phase()
    }

    /// Latest raw pointer position.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.follower.pointer()
    }

    /// Current smoothed position.
    #[must_use]
    pub fn smoothed(&self) -> Point {
        self.follower.position()
    }

    /// Pointer entered the region of the item with `key`.
    ///
    /// Returns `false` and leaves state untouched when `key` is not in the list.
    pub fn hover_enter(&mut self, key: u32) -> bool {
        if self.item(key).is_none() {
            log::warn!("image reveal: ignoring hover on unknown item {key}");
            return false;
        }
        self.focused = Some(key);
        if self.viewport.class().is_large() {
            self.show_panel();
        }
        true
    }

    /// Pointer left the whole container.
    pub fn leave_container(&mut self) {
        self.focused = None;
        if self.presence.hide() == Some(PresenceEvent::ExitStarted) {
            self.exits_started += 1;
            log::debug!("image reveal: exit started");
        }
    }

    /// Pointer moved anywhere over the container (viewport coordinates).
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.follower.set_pointer(Point::new(x, y));
    }

    /// Window width changed. Returns the new class when it changed.
    pub fn resize(&mut self, width_px: f64) -> Option<ViewportClass> {
        let class = self.viewport.observe(width_px)?;
        log::debug!("image reveal: viewport is now {}", class.as_str());
        match class {
            ViewportClass::Small => {
                self.presence.unmount();
                self.shown = None;
            }
            ViewportClass::Large => {
                if self.focused.is_some() {
                    self.show_panel();
                }
            }
        }
        Some(class)
    }

    /// Advance animations by `dt_secs`. Returns `true` while more frames are needed.
    pub fn tick(&mut self, dt_secs: f64) -> bool {
        self.follower.step(dt_secs);
        match self.presence.step(dt_secs) {
            Some(PresenceEvent::Mounted) => {
                self.shown = self.focused;
            }
            Some(PresenceEvent::Unmounted) => {
                self.shown = None;
                log::debug!("image reveal: panel unmounted");
            }
            Some(PresenceEvent::Entered | PresenceEvent::ExitStarted) | None => {}
        }
        self.is_animating()
    }

    /// Whether [`RevealState::tick`] still has work to do.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.presence.is_animating() || !self.follower.is_settled()
    }

    /// The floating panel, if it belongs in the render tree.
    #[must_use]
    pub fn panel(&self) -> Option<PanelFrame> {
        if !self.viewport.class().is_large() || !self.presence.is_mounted() {
            return None;
        }
        let item = *self.shown.and_then(|key| self.item(key))?;
        Some(PanelFrame {
            item,
            center: self.follower.position(),
            opacity: self.presence.opacity(),
            scale: self.presence.scale(),
            phase: self.presence.phase(),
        })
    }

    /// Whether each item renders its own inline preview.
    #[must_use]
    pub fn shows_inline_previews(&self) -> bool {
        !self.viewport.class().is_large()
    }

    fn show_panel(&mut self) {
        if self.presence.show() == Some(PresenceEvent::Mounted) {
            log::debug!("image reveal: panel mounted");
        }
        // Mid-exit the old content stays until the exit completes.
        if self.presence.phase() != PresencePhase::Exiting {
            self.shown = self.focused;
        }
    }

    fn item(&self, key: u32) -> Option<&'static VisualItem> {
        self.items.iter().find(|item| item.key == key)
    }
}
