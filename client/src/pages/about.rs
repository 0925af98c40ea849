//! About page: introduction, experience, studies, and skills.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::components::{
    image_reveal::{LINK_REL, LINK_TARGET},
    page_head::PageHead,
};
use crate::content::{ABOUT, About, ImageRef, PERSON, essential_social};
use crate::util::format::aspect_ratio_css;

/// One table-of-contents link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Fragment id of the section heading.
    pub id: &'static str,
    pub title: &'static str,
}

/// Table of contents for the sections that are switched on, in page order.
#[must_use]
pub fn toc_entries(about: &About) -> Vec<TocEntry> {
    [
        (about.intro.display, "intro", about.intro.title),
        (about.work.display, "work", about.work.title),
        (about.studies.display, "studies", about.studies.title),
        (about.technical.display, "technical", about.technical.title),
    ]
    .into_iter()
    .filter(|(display, _, _)| *display)
    .map(|(_, id, title)| TocEntry { id, title })
    .collect()
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let about = ABOUT;

    let toc = about.table_of_contents.then(|| {
        let links = toc_entries(&about)
            .into_iter()
            .map(|entry| view! { <li><a href=format!("#{}", entry.id)>{entry.title}</a></li> })
            .collect_view();
        view! { <nav class="about__toc" aria-label="On this page"><ul>{links}</ul></nav> }
    });

    let profile = view! {
        <aside class="about__profile">
            {about.show_avatar.then(|| view! { <img class="about__avatar" src=PERSON.avatar alt=PERSON.name/> })}
            <p class="about__location">{PERSON.location}</p>
            <ul class="about__languages">
                {PERSON.languages.iter().map(|lang| view! { <li>{*lang}</li> }).collect_view()}
            </ul>
        </aside>
    };

    let intro = about.intro.display.then(|| {
        view! {
            <section id="intro" class="about__section">
                <h1 class="about__name">{PERSON.name}</h1>
                <p class="about__role">{PERSON.role}</p>
                {about.calendar.map(|href| {
                    view! { <a class="btn about__calendar" href=href target=LINK_TARGET rel=LINK_REL>"Schedule a call"</a> }
                })}
                <ul class="about__social">
                    {essential_social()
                        .into_iter()
                        .map(|link| view! { <li><a href=link.link target=LINK_TARGET rel=LINK_REL>{link.name}</a></li> })
                        .collect_view()}
                </ul>
                <p>{about.intro.description}</p>
            </section>
        }
    });

    let work = about.work.display.then(|| {
        let entries = about
            .work
            .entries
            .iter()
            .map(|job| {
                view! {
                    <article class="about__job">
                        <header>
                            <h3>{job.company}</h3>
                            <span class="about__timeframe">{job.timeframe}</span>
                        </header>
                        <p class="about__job-role">{job.role}</p>
                        <ul>{job.achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}</ul>
                        <ImageStrip images=job.images/>
                    </article>
                }
            })
            .collect_view();
        view! {
            <section id="work" class="about__section">
                <h2>{about.work.title}</h2>
                {entries}
            </section>
        }
    });

    let studies = about.studies.display.then(|| {
        view! {
            <section id="studies" class="about__section">
                <h2>{about.studies.title}</h2>
                {about
                    .studies
                    .entries
                    .iter()
                    .map(|school| view! { <article><h3>{school.name}</h3><p>{school.description}</p></article> })
                    .collect_view()}
            </section>
        }
    });

    let technical = about.technical.display.then(|| {
        let skills = about
            .technical
            .entries
            .iter()
            .map(|skill| {
                view! {
                    <article class="about__skill">
                        <h3>{skill.title}</h3>
                        <p>{skill.description}</p>
                        <ul class="about__tags">
                            {skill
                                .tags
                                .iter()
                                .map(|tag| view! { <li class="tag" data-icon=tag.icon>{tag.name}</li> })
                                .collect_view()}
                        </ul>
                        <ImageStrip images=skill.images/>
                    </article>
                }
            })
            .collect_view();
        view! {
            <section id="technical" class="about__section">
                <h2>{about.technical.title}</h2>
                {skills}
            </section>
        }
    });

    view! {
        <PageHead meta=about.meta/>
        <div class="about">
            {toc}
            {profile}
            <div class="about__body">{intro} {work} {studies} {technical}</div>
        </div>
    }
}

#[component]
fn ImageStrip(images: &'static [ImageRef]) -> impl IntoView {
    (!images.is_empty()).then(|| {
        view! {
            <div class="image-strip">
                {images
                    .iter()
                    .map(|image| {
                        view! {
                            <img
                                src=image.src
                                alt=image.alt
                                loading="lazy"
                                style=format!("aspect-ratio: {};", aspect_ratio_css(image.width, image.height))
                            />
                        }
                    })
                    .collect_view()}
            </div>
        }
    })
}
