//! Per-route `<title>`, description, and social-card tags.

#[cfg(test)]
#[path = "page_head_test.rs"]
mod page_head_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::content::{BASE_URL, PageMeta};

/// Resolve a site-relative path against the canonical origin. Absolute URLs
/// pass through unchanged.
#[must_use]
pub fn absolute_url(path: &str) -> String {
    if path.starts_with("https://") || path.starts_with("http://") {
        return path.to_owned();
    }
    format!("{}/{}", BASE_URL.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[component]
pub fn PageHead(meta: PageMeta, #[prop(optional)] image: Option<&'static str>) -> impl IntoView {
    view! {
        <Title text=meta.title/>
        <Meta name="description" content=meta.description/>
        <Meta property="og:title" content=meta.title/>
        <Meta property="og:description" content=meta.description/>
        <Meta property="og:url" content=absolute_url(meta.path)/>
        {image.map(|src| view! { <Meta property="og:image" content=absolute_url(src)/> })}
    }
}
