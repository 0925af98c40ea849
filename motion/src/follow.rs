//! Two-axis spring filter that trails the pointer.
//!
//! The raw pointer position is the target; the smoothed position is what the
//! preview panel is painted at. The very first sample snaps the filter so the
//! panel does not fly in from the viewport origin; every later sample is
//! chased continuously.

#[cfg(test)]
#[path = "follow_test.rs"]
mod follow_test;

use crate::spring::{Spring, SpringConfig};

/// A point in viewport (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Independent x/y springs chasing the latest pointer sample.
#[derive(Debug, Clone, Copy)]
pub struct PointerFollower {
    x: Spring,
    y: Spring,
    primed: bool,
}

impl Default for PointerFollower {
    fn default() -> Self {
        Self::new(SpringConfig::FOLLOW)
    }
}

impl PointerFollower {
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self { x: Spring::new(config, 0.0), y: Spring::new(config, 0.0), primed: false }
    }

    /// Feed the latest raw pointer position. The most recent call always wins.
    pub fn set_pointer(&mut self, pointer: Point) {
        if !pointer.x.is_finite() || !pointer.y.is_finite() {
            return;
        }
        if self.primed {
            self.x.set_target(pointer.x);
            self.y.set_target(pointer.y);
        } else {
            self.x.snap_to(pointer.x);
            self.y.snap_to(pointer.y);
            self.primed = true;
        }
    }

    /// Latest raw pointer position.
    #[must_use]
    pub fn pointer(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    /// Current smoothed position.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    /// Whether any pointer sample has been received yet.
    #[must_use]
    pub fn is_primed(&self) -> bool {
        self.primed
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    /// Advance both axes. Returns `true` while either axis is still moving.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        let x_moving = self.x.step(dt_secs);
        let y_moving = self.y.step(dt_secs);
        x_moving || y_moving
    }
}
