//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure formatting
//! from page and component logic to improve reuse and testability.

pub mod format;
pub mod frame_loop;
pub mod markdown;
pub mod schema;
pub mod theme;
pub mod viewport;
