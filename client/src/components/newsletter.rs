//! Newsletter call-to-action.
//!
//! There is no subscription backend; the card opens a pre-addressed email.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use leptos::prelude::*;

use crate::content::{NEWSLETTER, PERSON};

/// `mailto:` link asking to be added to the newsletter.
#[must_use]
pub fn subscribe_href(email: &str) -> String {
    format!("mailto:{email}?subject=Newsletter%20subscription")
}

#[component]
pub fn NewsletterCard() -> impl IntoView {
    NEWSLETTER.display.then(|| {
        view! {
            <section class="newsletter">
                <h2 class="newsletter__title">{NEWSLETTER.title}</h2>
                <p class="newsletter__description">{NEWSLETTER.description}</p>
                <a class="btn newsletter__subscribe" href=subscribe_href(PERSON.email)>
                    "Subscribe"
                </a>
            </section>
        }
    })
}
