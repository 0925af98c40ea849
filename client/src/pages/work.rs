//! Project list page.

use leptos::prelude::*;

use crate::components::{image_reveal::ImageReveal, page_head::PageHead};
use crate::content::{VISUAL_ITEMS, WORK};

#[component]
pub fn WorkPage() -> impl IntoView {
    view! {
        <PageHead meta=WORK/>
        <h1 class="page__title">{WORK.title}</h1>
        <p class="page__description">{WORK.description}</p>
        <ImageReveal items=VISUAL_ITEMS/>
    }
}
