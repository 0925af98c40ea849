//! Project list with a floating hover preview.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `VisualItem`s as links. On large viewports a panel trails the
//! pointer and shows a live embed of the focused item; on small viewports
//! every item carries its own inline embed instead.
//!
//! DESIGN
//! ======
//! All behaviour sits in `state::reveal::RevealState`, owned by this
//! component in an `RwSignal`. DOM handlers only forward events into it. In
//! the browser a frame loop ticks the state while `is_animating()` holds and
//! stops on its own once everything settles or the widget unmounts.

#[cfg(test)]
#[path = "image_reveal_test.rs"]
mod image_reveal_test;

use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::CustomAttribute;
use motion::viewport::ViewportClass;

use crate::content::VisualItem;
use crate::state::reveal::{PanelFrame, RevealState};

/// Links open in a new browsing context.
pub const LINK_TARGET: &str = "_blank";
/// Deny the opened page access to `window.opener` and the referrer.
pub const LINK_REL: &str = "noopener noreferrer";

/// One navigable region of the item list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemRegion {
    pub key: u32,
    pub href: &'static str,
    pub label: &'static str,
    pub poster: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

/// Regions in list order, one per item.
#[must_use]
pub fn item_regions(items: &[VisualItem]) -> Vec<ItemRegion> {
    items
        .iter()
        .map(|item| ItemRegion {
            key: item.key,
            href: item.target_url,
            label: item.label,
            poster: item.preview_image_url,
            target: LINK_TARGET,
            rel: LINK_REL,
        })
        .collect()
}

/// Inline style placing the panel centre on the smoothed pointer.
#[must_use]
pub fn panel_style(frame: &PanelFrame) -> String {
    format!(
        "left: {:.2}px; top: {:.2}px; opacity: {:.3}; transform: translate(-50%, -50%) scale({:.4});",
        frame.center.x, frame.center.y, frame.opacity, frame.scale
    )
}

/// Embeds are fetched only once they approach the viewport.
pub const EMBED_LOADING: &str = "lazy";

/// Screenshot shown behind an embed until (or unless) it loads.
#[must_use]
pub fn poster_style(url: &str) -> String {
    format!("background-image: url('{url}');")
}

/// `viewport` is the class assumed until the window has been measured,
/// which is also what the server renders.
#[component]
pub fn ImageReveal(
    items: &'static [VisualItem],
    #[prop(default = ViewportClass::Large)] viewport: ViewportClass,
) -> impl IntoView {
    let reveal = RwSignal::new(RevealState::with_viewport(items, viewport));

    #[cfg(feature = "hydrate")]
    {
        use crate::util::frame_loop::FrameLoop;
        use crate::util::viewport::{watch_width, window_width};

        let frames = FrameLoop::new();
        let stop_frames = frames.stopper();
        let animating = Memo::new(move |_| reveal.with(RevealState::is_animating));
        Effect::new(move || {
            if animating.get() {
                frames.start(move |dt| reveal.try_update(|s| s.tick(dt)).unwrap_or(false));
            }
        });

        Effect::new(move || {
            if let Some(width) = window_width() {
                reveal.update(|s| {
                    s.resize(width);
                });
            }
        });
        let resize = watch_width(move |width| {
            reveal.update(|s| {
                s.resize(width);
            });
        });

        on_cleanup(move || {
            stop_frames();
            resize.remove();
        });
    }

    let inline = Memo::new(move |_| reveal.with(RevealState::shows_inline_previews));
    let panel = Memo::new(move |_| reveal.with(RevealState::panel));
    // Re-created only when the shown item changes, not every frame.
    let panel_item = Memo::new(move |_| panel.get().map(|frame| frame.item));

    let rows = item_regions(items)
        .into_iter()
        .map(|region| {
            let key = region.key;
            let active = move || reveal.with(|s| s.is_focused(key));
            view! {
                <a href=region.href target=region.target rel=region.rel class="image-reveal__link">
                    <div
                        class="image-reveal__item"
                        on:mouseenter=move |_| {
                            reveal.update(|s| {
                                s.hover_enter(key);
                            });
                        }
                    >
                        <Show when=move || inline.get()>
                            <div class="image-reveal__inline" style=poster_style(region.poster)>
                                {view! {
                                    <iframe class="image-reveal__embed" src=region.href title=region.label></iframe>
                                }
                                    .attr("loading", EMBED_LOADING)}
                            </div>
                        </Show>
                        <h2 class="image-reveal__label" class:image-reveal__label--active=active>
                            {region.label}
                        </h2>
                        <span
                            class="image-reveal__arrow"
                            class:image-reveal__arrow--active=active
                            aria-hidden="true"
                        >
                            <ArrowUpRight/>
                        </span>
                        <div class="image-reveal__divider" class:image-reveal__divider--active=active></div>
                    </div>
                </a>
            }
        })
        .collect_view();

    view! {
        <div
            class="image-reveal"
            on:mousemove=move |ev: leptos::ev::MouseEvent| {
                let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
                reveal.update(|s| s.pointer_move(x, y));
            }
            on:mouseleave=move |_| reveal.update(RevealState::leave_container)
        >
            {rows}
            <Show when=move || panel_item.get().is_some()>
                <div
                    class="image-reveal__panel"
                    style=move || panel.get().map(|frame| panel_style(&frame)).unwrap_or_default()
                >
                    {move || {
                        panel_item
                            .get()
                            .map(|item| {
                                view! {
                                    <iframe
                                        class="image-reveal__embed"
                                        src=item.target_url
                                        title=item.label
                                        style=poster_style(item.preview_image_url)
                                    ></iframe>
                                }
                                    .attr("loading", EMBED_LOADING)
                            })
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ArrowUpRight() -> impl IntoView {
    view! {
        <svg
            class="image-reveal__arrow-icon"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            <path d="M7 17L17 7"/>
            <path d="M7 7h10v10"/>
        </svg>
    }
}
