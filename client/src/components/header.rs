//! Site header: navigation, theme toggle, and the narrow-screen menu button.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::content::{PERSON, nav_pages};
use crate::state::ui::{Theme, UiState};
use crate::util::theme;

/// Whether the nav entry for `page_path` should be highlighted at `current`.
///
/// The home entry matches only `/`; other entries also match their subpaths.
#[must_use]
pub fn is_current_page(page_path: &str, current: &str) -> bool {
    if page_path == "/" {
        return current == "/";
    }
    current == page_path || current.strip_prefix(page_path).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let links = nav_pages()
        .into_iter()
        .map(|page| {
            let current = move || is_current_page(page.path, &location.pathname.get());
            view! {
                <A href=page.path attr:class="site-header__link">
                    <span
                        class="site-header__label"
                        class:site-header__label--active=current
                        on:click=move |_| ui.update(|u| u.menu_open = false)
                    >
                        {page.label}
                    </span>
                </A>
            }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">{PERSON.name}</a>

            <nav class="site-header__nav" class:site-header__nav--open=move || ui.get().menu_open>
                {links}
            </nav>

            <span class="site-header__spacer"></span>

            <button
                class="btn site-header__menu"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(|u| u.menu_open = !u.menu_open)
            >
                "☰"
            </button>

            <button
                class="btn site-header__theme"
                on:click=move |_| {
                    let next = theme::toggle(ui.get_untracked().theme);
                    ui.update(|u| u.theme = next);
                }
                title=move || ui.get().theme.toggle_label()
                aria-label=move || ui.get().theme.toggle_label()
            >
                {move || if ui.get().theme == Theme::Dark { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
