//! Platform-free animation math for the portfolio UI.
//!
//! Nothing in this crate touches the DOM. The `client` crate feeds it raw
//! pointer coordinates, window widths, and frame deltas, then reads back the
//! values it should paint. Keeping the physics here lets the hover-preview
//! behaviour be exercised with plain unit tests instead of a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`spring`] | Damped spring configuration and integrator |
//! | [`follow`] | Two-axis spring filter that chases the pointer |
//! | [`presence`] | Mount/unmount state machine with entry and exit animation |
//! | [`viewport`] | Large/small viewport classification |
//! | [`consts`] | Shared numeric constants (breakpoint, spring tunings, step limits) |
//! | [`error`] | Configuration errors |

pub mod consts;
pub mod error;
pub mod follow;
pub mod presence;
pub mod spring;
pub mod viewport;

pub use error::MotionError;
