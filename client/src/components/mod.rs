//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the image-reveal project list. Site-wide
//! state comes from Leptos context; the reveal widget owns its own.

pub mod footer;
pub mod header;
pub mod image_reveal;
pub mod newsletter;
pub mod page_head;
