//! # client
//!
//! Leptos frontend for the portfolio site. Compiled twice: with `ssr` into
//! the server binary, and with `hydrate` into the WASM bundle that takes over
//! the server-rendered markup.
//!
//! | Module | Role |
//! |--------|------|
//! | `app` | HTML shell, context providers, routes |
//! | `content` | Static site content |
//! | `state` | Reactive state (site chrome, image-reveal widget) |
//! | `components` | Reusable views, including `ImageReveal` |
//! | `pages` | Route-level screens |
//! | `util` | Formatting, Markdown, JSON-LD, and browser bridges |

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
