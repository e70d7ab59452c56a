//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, toaster::Toaster};
use crate::content::{OWNER_NAME, OWNER_ROLE};
use crate::pages::{
    about::AboutPage, contact::ContactPage, experience::ExperiencePage, home::HomePage, projects::ProjectsPage,
    skills::SkillsPage,
};
use crate::state::toast::ToastState;

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
/// Provides the toast queue and lays out navbar, routed page and footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=format!("{OWNER_NAME} | {OWNER_ROLE}")/>
        <Meta name="description" content=format!("Portfolio of {OWNER_NAME}, {OWNER_ROLE}.")/>

        <Router>
            <div class="app">
                <Navbar/>
                <main class="app__main">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("skills") view=SkillsPage/>
                        <Route path=StaticSegment("projects") view=ProjectsPage/>
                        <Route path=StaticSegment("experience") view=ExperiencePage/>
                        <Route path=StaticSegment("contact") view=ContactPage/>
                    </Routes>
                </main>
                <Footer/>
                <Toaster/>
            </div>
        </Router>
    }
}
