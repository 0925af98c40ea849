//! Mount/unmount state machine with animated entry and exit.
//!
//! A single spring drives `progress` from 0 (hidden) to 1 (visible); opacity
//! and scale are both projected from it. The content stays mounted for the
//! whole exit and is only reported as unmounted once the exit spring
//! settles. A `show` that arrives mid-exit is held until that happens.

#[cfg(test)]
#[path = "presence_test.rs"]
mod presence_test;

use crate::consts::HIDDEN_SCALE;
use crate::spring::{Spring, SpringConfig};

/// Lifecycle phase of animated content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresencePhase {
    /// Not in the render tree.
    #[default]
    Hidden,
    /// Mounted and animating toward fully visible.
    Entering,
    /// Mounted and at rest, fully visible.
    Visible,
    /// Still mounted, animating toward hidden before removal.
    Exiting,
}

/// Transitions reported by [`Presence`] so callers can log or count them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceEvent {
    /// Content entered the render tree and began its entry animation.
    Mounted,
    /// Entry animation finished.
    Entered,
    /// Exit animation began.
    ExitStarted,
    /// Content left the render tree.
    Unmounted,
}

#[derive(Debug, Clone, Copy)]
pub struct Presence {
    phase: PresencePhase,
    progress: Spring,
    pending_show: bool,
}

impl Default for Presence {
    fn default() -> Self {
        Self::new(SpringConfig::PRESENCE)
    }
}

impl Presence {
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self { phase: PresencePhase::Hidden, progress: Spring::new(config, 0.0), pending_show: false }
    }

    #[must_use]
    pub fn phase(&self) -> PresencePhase {
        self.phase
    }

    /// Whether the content belongs in the render tree right now.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != PresencePhase::Hidden
    }

    /// Whether a `show` is waiting for the current exit to finish.
    #[must_use]
    pub fn has_pending_show(&self) -> bool {
        self.pending_show
    }

    /// Whether [`Presence::step`] still has work to do.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, PresencePhase::Entering | PresencePhase::Exiting) || self.pending_show
    }

    /// Raw spring progress; may briefly exceed 1 on entry overshoot.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.is_mounted() { self.progress.value() } else { 0.0 }
    }

    /// Opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.progress().clamp(0.0, 1.0)
    }

    /// Scale factor, `HIDDEN_SCALE` at progress 0 and 1.0 at progress 1.
    #[must_use]
    pub fn scale(&self) -> f64 {
        (HIDDEN_SCALE + (1.0 - HIDDEN_SCALE) * self.progress()).max(0.0)
    }

    /// Request the content be visible.
    pub fn show(&mut self) -> Option<PresenceEvent> {
        match self.phase {
            PresencePhase::Hidden => {
                self.pending_show = false;
                self.phase = PresencePhase::Entering;
                self.progress.snap_to(0.0);
                self.progress.set_target(1.0);
                Some(PresenceEvent::Mounted)
            }
            PresencePhase::Entering | PresencePhase::Visible => None,
            PresencePhase::Exiting => {
                self.pending_show = true;
                None
            }
        }
    }

    /// Request the content be hidden; the exit animation runs to completion.
    pub fn hide(&mut self) -> Option<PresenceEvent> {
        self.pending_show = false;
        match self.phase {
            PresencePhase::Hidden | PresencePhase::Exiting => None,
            PresencePhase::Entering | PresencePhase::Visible => {
                self.phase = PresencePhase::Exiting;
                self.progress.set_target(0.0);
                Some(PresenceEvent::ExitStarted)
            }
        }
    }

    /// Remove the content immediately, skipping any exit animation.
    ///
    /// Used when the content's rendering mode disappears altogether rather
    /// than the content being dismissed.
    pub fn unmount(&mut self) -> Option<PresenceEvent> {
        self.pending_show = false;
        let was_mounted = self.is_mounted();
        self.phase = PresencePhase::Hidden;
        self.progress.snap_to(0.0);
        was_mounted.then_some(PresenceEvent::Unmounted)
    }

    /// Advance the transition by `dt_secs`, reporting at most one event.
    pub fn step(&mut self, dt_secs: f64) -> Option<PresenceEvent> {
        match self.phase {
            PresencePhase::Hidden => {
                if self.pending_show {
                    self.show()
                } else {
                    None
                }
            }
            PresencePhase::Visible => None,
            PresencePhase::Entering => {
                if self.progress.step(dt_secs) {
                    None
                } else {
                    self.phase = PresencePhase::Visible;
                    Some(PresenceEvent::Entered)
                }
            }
            PresencePhase::Exiting => {
                if self.progress.step(dt_secs) {
                    None
                } else {
                    self.phase = PresencePhase::Hidden;
                    Some(PresenceEvent::Unmounted)
                }
            }
        }
    }
}
