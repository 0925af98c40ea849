//! `requestAnimationFrame` loop for spring animations.
//!
//! The loop runs only while its tick callback asks for another frame, so an
//! idle widget costs nothing. `start` is idempotent while a loop is active.
//! Frame deltas come from the rAF timestamp; the first frame of each run
//! assumes a 60 Hz delta.

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
const FIRST_FRAME_DT_SECS: f64 = 1.0 / 60.0;

#[cfg(feature = "hydrate")]
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Self-rescheduling animation loop.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    alive: Arc<AtomicBool>,
}

#[cfg(feature = "hydrate")]
impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
impl FrameLoop {
    #[must_use]
    pub fn new() -> Self {
        Self { running: Rc::new(Cell::new(false)), alive: Arc::new(AtomicBool::new(true)) }
    }

    /// A `Send` closure that stops the loop after the current frame and
    /// refuses further starts. Suitable for `on_cleanup`.
    #[must_use]
    pub fn stopper(&self) -> impl FnOnce() + Send + Sync + 'static {
        let alive = Arc::clone(&self.alive);
        move || alive.store(false, Ordering::Relaxed)
    }

    /// Begin calling `tick(dt_secs)` every frame until it returns `false`.
    pub fn start(&self, tick: impl FnMut(f64) -> bool + 'static) {
        if self.running.get() || !self.alive.load(Ordering::Relaxed) {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        self.running.set(true);

        let holder: FrameCallback = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let running = Rc::clone(&self.running);
        let alive = Arc::clone(&self.alive);
        let mut tick = tick;
        let mut last_ts = None::<f64>;

        let cb = Closure::wrap(Box::new(move |ts: f64| {
            let dt = last_ts.map_or(FIRST_FRAME_DT_SECS, |prev| ((ts - prev) / 1000.0).max(0.0));
            last_ts = Some(ts);

            let again = alive.load(Ordering::Relaxed) && tick(dt);
            let rescheduled = again
                && web_sys::window().is_some_and(|w| {
                    holder_for_cb
                        .borrow()
                        .as_ref()
                        .is_some_and(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok())
                });
            if !rescheduled {
                running.set(false);
                holder_for_cb.borrow_mut().take();
            }
        }) as Box<dyn FnMut(f64)>);

        if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
            *holder.borrow_mut() = Some(cb);
        } else {
            self.running.set(false);
        }
    }
}
