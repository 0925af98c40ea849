//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header};
use crate::content::PERSON;
use crate::pages::{
    about::AboutPage,
    blog::{BlogIndexPage, BlogPostPage},
    gallery::GalleryPage,
    home::HomePage,
    not_found::NotFoundPage,
    work::WorkPage,
};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site chrome state and sets up client-side routing. The stored
/// theme is applied after hydration so the server markup stays deterministic.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let theme = crate::util::theme::read_preference();
        crate::util::theme::apply(theme);
        ui.update(|u| u.theme = theme);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text=PERSON.name/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("work") view=WorkPage/>
                    <Route path=StaticSegment("blog") view=BlogIndexPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                    <Route path=StaticSegment("gallery") view=GalleryPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
