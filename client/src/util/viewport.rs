//! Browser bridge for viewport classification.
//!
//! Reads `window.innerWidth` and reports it on every `resize`. The pure
//! classification lives in `motion::viewport`; this module only wires the
//! DOM event. Server builds have no window, so the watcher is hydrate-only.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Current `window.innerWidth` in CSS pixels.
#[cfg(feature = "hydrate")]
pub fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Call `on_width` with the window width after every `resize` event.
///
/// The returned handle must be removed on unmount; callers do this from
/// `on_cleanup`.
#[cfg(feature = "hydrate")]
pub fn watch_width(on_width: impl Fn(f64) + 'static) -> WindowListenerHandle {
    window_event_listener(leptos::ev::resize, move |_| {
        if let Some(width) = window_width() {
            on_width(width);
        }
    })
}
