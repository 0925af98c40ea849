//! Photo gallery laid out as a balanced masonry grid.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use leptos::prelude::*;

use crate::components::page_head::PageHead;
use crate::content::{GALLERY, GalleryImage, Orientation};

pub const GALLERY_COLUMNS: usize = 2;

/// Rendered height per unit of column width, in 48ths.
#[must_use]
pub fn tile_height(orientation: Orientation) -> u32 {
    match orientation {
        // 16:9
        Orientation::Horizontal => 27,
        // 3:4
        Orientation::Vertical => 64,
    }
}

#[must_use]
pub fn aspect_ratio(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Horizontal => "16 / 9",
        Orientation::Vertical => "3 / 4",
    }
}

/// Deal images into `columns` columns, each going to the currently shortest
/// column (leftmost on ties). Order within a column follows input order.
#[must_use]
pub fn masonry_columns(images: &[GalleryImage], columns: usize) -> Vec<Vec<&GalleryImage>> {
    let columns = columns.max(1);
    let mut out = vec![Vec::new(); columns];
    let mut heights = vec![0_u32; columns];
    for image in images {
        let (shortest, _) = heights
            .iter()
            .enumerate()
            .min_by_key(|(index, height)| (**height, *index))
            .unwrap_or((0, &0));
        heights[shortest] += tile_height(image.orientation);
        out[shortest].push(image);
    }
    out
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let columns = masonry_columns(GALLERY.images, GALLERY_COLUMNS)
        .into_iter()
        .map(|column| {
            let tiles = column
                .into_iter()
                .map(|image| {
                    view! {
                        <img
                            class="gallery__image"
                            src=image.src
                            alt=image.alt
                            loading="lazy"
                            style=format!("aspect-ratio: {};", aspect_ratio(image.orientation))
                        />
                    }
                })
                .collect_view();
            view! { <div class="gallery__column">{tiles}</div> }
        })
        .collect_view();

    view! {
        <PageHead meta=GALLERY.meta/>
        <div class="gallery">{columns}</div>
    }
}
