//! Site footer with social links.

use leptos::prelude::*;

use crate::components::image_reveal::{LINK_REL, LINK_TARGET};
use crate::content::{PERSON, SOCIAL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="site-footer__owner">"© " {PERSON.name} " / " {PERSON.role}</span>
            <ul class="site-footer__social">
                {SOCIAL
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a
                                    href=link.link
                                    target=LINK_TARGET
                                    rel=LINK_REL
                                    class="site-footer__link"
                                    data-icon=link.icon
                                >
                                    {link.name}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </footer>
    }
}
