//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads static content and delegates reusable pieces (head tags,
//! the project list, newsletter card) to `components`.

pub mod about;
pub mod blog;
pub mod gallery;
pub mod home;
pub mod not_found;
pub mod work;
