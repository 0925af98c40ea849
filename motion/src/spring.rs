//! Damped spring integrator.
//!
//! A spring pulls `value` toward `target` with force `-k·(x - target) - c·v`.
//! Each frame delta is split into fixed-size semi-implicit Euler substeps so
//! the result does not depend much on the display refresh rate.

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

use crate::consts::{
    FOLLOW_DAMPING, FOLLOW_REST_DELTA_PX, FOLLOW_REST_SPEED_PX, FOLLOW_STIFFNESS, MAX_FRAME_DT_SECS, MAX_SUBSTEP_SECS,
    PRESENCE_DAMPING, PRESENCE_REST_DELTA, PRESENCE_REST_SPEED, PRESENCE_STIFFNESS,
};
use crate::error::MotionError;

/// Physical parameters of a spring plus the tolerances that define "at rest".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Pointer-follow tuning: overdamped, so the panel trails without bouncing.
    pub const FOLLOW: Self = Self {
        stiffness: FOLLOW_STIFFNESS,
        damping: FOLLOW_DAMPING,
        mass: 1.0,
        rest_delta: FOLLOW_REST_DELTA_PX,
        rest_speed: FOLLOW_REST_SPEED_PX,
    };

    /// Entry/exit tuning for the preview panel's opacity and scale.
    pub const PRESENCE: Self = Self {
        stiffness: PRESENCE_STIFFNESS,
        damping: PRESENCE_DAMPING,
        mass: 1.0,
        rest_delta: PRESENCE_REST_DELTA,
        rest_speed: PRESENCE_REST_SPEED,
    };

    /// Build a unit-mass spring with the pointer-follow rest tolerances.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError`] when stiffness is not positive or damping is negative.
    pub fn new(stiffness: f64, damping: f64) -> Result<Self, MotionError> {
        Self::with_mass(stiffness, damping, 1.0)
    }

    /// Build a spring with an explicit mass.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError`] when any parameter is out of range or not finite.
    pub fn with_mass(stiffness: f64, damping: f64, mass: f64) -> Result<Self, MotionError> {
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(MotionError::InvalidStiffness(stiffness));
        }
        if !damping.is_finite() || damping < 0.0 {
            return Err(MotionError::InvalidDamping(damping));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(MotionError::InvalidMass(mass));
        }
        Ok(Self { stiffness, damping, mass, rest_delta: FOLLOW_REST_DELTA_PX, rest_speed: FOLLOW_REST_SPEED_PX })
    }

    /// Replace the rest tolerances.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidRestTolerance`] for non-positive or non-finite values.
    pub fn with_rest(mut self, rest_delta: f64, rest_speed: f64) -> Result<Self, MotionError> {
        for tolerance in [rest_delta, rest_speed] {
            if !tolerance.is_finite() || tolerance <= 0.0 {
                return Err(MotionError::InvalidRestTolerance(tolerance));
            }
        }
        self.rest_delta = rest_delta;
        self.rest_speed = rest_speed;
        Ok(self)
    }

    /// `c / (2·√(k·m))`. Below 1 the spring overshoots; at or above 1 it does not.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// One animated scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// A spring resting at `value`.
    #[must_use]
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self { config, value, velocity: 0.0, target: value }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Retarget without disturbing the current value or velocity.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jump straight to `value` and stop.
    pub fn snap_to(&mut self, value: f64) {
        if value.is_finite() {
            self.value = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    /// Whether value and velocity are both within the rest tolerances.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_delta && self.velocity.abs() < self.config.rest_speed
    }

    /// Advance by `dt_secs`. Returns `true` while the spring is still moving.
    ///
    /// Non-finite or non-positive deltas advance nothing. Deltas longer than
    /// [`MAX_FRAME_DT_SECS`] are clamped. Once settled, the value is pinned to
    /// the target exactly.
    pub fn step(&mut self, dt_secs: f64) -> bool {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return true;
        }

        let SpringConfig { stiffness, damping, mass, .. } = self.config;
        let mut remaining = dt_secs.min(MAX_FRAME_DT_SECS);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECS);
            let displacement = self.value - self.target;
            let accel = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}
