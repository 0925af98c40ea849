//! Blog index and individual posts.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::page_head::PageHead;
use crate::content::{BLOG, BlogPost, find_post, posts_newest_first};
use crate::pages::not_found::NotFoundPage;
use crate::util::format::format_post_date;
use crate::util::markdown::{reading_minutes, render_markdown_html};

/// `"3 min read"`.
#[must_use]
pub fn reading_time_label(post: &BlogPost) -> String {
    format!("{} min read", reading_minutes(post.body_markdown))
}

#[must_use]
pub fn post_href(post: &BlogPost) -> String {
    format!("/blog/{}", post.slug)
}

#[component]
pub fn BlogIndexPage() -> impl IntoView {
    let posts = posts_newest_first()
        .into_iter()
        .map(|post| {
            view! {
                <article class="blog__entry">
                    <h2><A href=post_href(post)>{post.title}</A></h2>
                    <PostByline post=post/>
                    <p class="blog__summary">{post.summary}</p>
                </article>
            }
        })
        .collect_view();

    view! {
        <PageHead meta=BLOG/>
        <h1 class="page__title">{BLOG.title}</h1>
        <div class="blog">{posts}</div>
    }
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let post = move || params.read().get("slug").and_then(|slug| find_post(&slug));

    move || match post() {
        Some(post) => view! {
            <Title text=post.title/>
            <Meta name="description" content=post.summary/>
            <article class="post">
                <h1 class="post__title">{post.title}</h1>
                <PostByline post=post/>
                <div class="post__body" inner_html=render_markdown_html(post.body_markdown)></div>
                <A href=BLOG.path attr:class="post__back">"All posts"</A>
            </article>
        }
        .into_any(),
        None => view! { <NotFoundPage/> }.into_any(),
    }
}

#[component]
fn PostByline(post: &'static BlogPost) -> impl IntoView {
    view! {
        <p class="post__byline">
            <time datetime=post.published.to_string()>{format_post_date(post.published)}</time>
            " · "
            <span>{reading_time_label(post)}</span>
            <span class="post__tags">
                {post.tags.iter().map(|tag| view! { <span class="tag">{*tag}</span> }).collect_view()}
            </span>
        </p>
    }
}
