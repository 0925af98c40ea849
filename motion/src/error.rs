//! Errors raised while building motion primitives.

/// Error returned by [`crate::spring::SpringConfig::new`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MotionError {
    /// Stiffness was zero, negative, or not finite.
    #[error("spring stiffness must be positive and finite, got {0}")]
    InvalidStiffness(f64),
    /// Damping was negative or not finite.
    #[error("spring damping must be non-negative and finite, got {0}")]
    InvalidDamping(f64),
    /// Mass was zero, negative, or not finite.
    #[error("spring mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    /// A rest tolerance was zero, negative, or not finite.
    #[error("spring rest tolerance must be positive and finite, got {0}")]
    InvalidRestTolerance(f64),
}
