//! Landing page: introduction, project list, latest writing.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{image_reveal::ImageReveal, newsletter::NewsletterCard, page_head::PageHead};
use crate::content::{BASE_URL, HOME, PERSON, SOCIAL, VISUAL_ITEMS, posts_newest_first};
use crate::util::format::format_post_date;
use crate::util::schema::person_json_ld;

/// How many recent posts the landing page teases.
const LATEST_POSTS: usize = 2;

#[component]
pub fn HomePage() -> impl IntoView {
    let json_ld = person_json_ld(&PERSON, SOCIAL, BASE_URL);

    let latest = posts_newest_first()
        .into_iter()
        .take(LATEST_POSTS)
        .map(|post| {
            view! {
                <li class="home__post">
                    <A href=format!("/blog/{}", post.slug)>{post.title}</A>
                    <time datetime=post.published.to_string()>{format_post_date(post.published)}</time>
                </li>
            }
        })
        .collect_view();

    view! {
        <PageHead meta=HOME.meta image=HOME.image/>
        <script type="application/ld+json" inner_html=json_ld></script>

        <section class="home__hero">
            <h1 class="home__headline">{HOME.headline}</h1>
            {HOME
                .featured
                .map(|featured| {
                    view! {
                        <A href=featured.href attr:class="home__featured">
                            {featured.title}
                        </A>
                    }
                })}
            <p class="home__subline">{HOME.subline}</p>
        </section>

        <ImageReveal items=VISUAL_ITEMS/>

        <section class="home__latest">
            <h2>"Latest from the blog"</h2>
            <ul>{latest}</ul>
        </section>

        <NewsletterCard/>
    }
}
