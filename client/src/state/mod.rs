//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` holds site chrome shared through Leptos context; `reveal` is owned by
//! each image-reveal widget instance.

pub mod reveal;
pub mod ui;
