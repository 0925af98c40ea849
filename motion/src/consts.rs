//! Shared numeric constants for the motion crate.

// ── Viewport ────────────────────────────────────────────────────

/// Window width (CSS pixels) at and above which the floating preview is used.
pub const VIEWPORT_BREAKPOINT_PX: f64 = 768.0;

// ── Pointer follow spring ───────────────────────────────────────

/// Stiffness of the per-axis spring that chases the pointer.
pub const FOLLOW_STIFFNESS: f64 = 300.0;

/// Damping of the per-axis pointer spring.
pub const FOLLOW_DAMPING: f64 = 40.0;

/// Position tolerance in pixels below which the pointer spring is at rest.
pub const FOLLOW_REST_DELTA_PX: f64 = 0.01;

/// Speed tolerance in pixels per second below which the pointer spring is at rest.
pub const FOLLOW_REST_SPEED_PX: f64 = 0.01;

// ── Presence spring ─────────────────────────────────────────────

/// Stiffness of the entry/exit transition.
pub const PRESENCE_STIFFNESS: f64 = 200.0;

/// Damping of the entry/exit transition.
pub const PRESENCE_DAMPING: f64 = 20.0;

/// Progress tolerance below which the presence spring is at rest.
pub const PRESENCE_REST_DELTA: f64 = 0.001;

/// Progress-per-second tolerance below which the presence spring is at rest.
pub const PRESENCE_REST_SPEED: f64 = 0.01;

/// Scale of the panel when fully hidden (progress 0).
pub const HIDDEN_SCALE: f64 = 0.8;

// ── Integration ─────────────────────────────────────────────────

/// Largest frame delta (seconds) integrated in one call. Longer gaps, such as a
/// backgrounded tab resuming, are clamped so the spring does not lurch.
pub const MAX_FRAME_DT_SECS: f64 = 0.1;

/// Largest single integration substep (seconds).
pub const MAX_SUBSTEP_SECS: f64 = 1.0 / 240.0;
