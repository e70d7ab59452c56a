//! Projects page: fetched project list with an "all / featured" toggle.

use leptos::prelude::*;

use crate::components::fetch_status::{FetchErrorNotice, LoadingPlaceholder};
use crate::components::project_card::ProjectCard;
use crate::net::api;
use crate::state::list_fetch::ListFetchState;
use crate::util::fetch::use_list_fetch;
use crate::util::filter::{ProjectFilter, apply_filter};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (state, retry) = use_list_fetch("projects", api::fetch_projects);
    let selected = RwSignal::new(ProjectFilter::All);
    let visible = Memo::new(move |_| state.with(|s| apply_filter(&s.items, &selected.get())));

    view! {
        <Show
            when=move || !state.with(ListFetchState::is_loading)
            fallback=|| view! { <LoadingPlaceholder label="Loading projects..."/> }
        >
            <div class="page">
                <header class="page__header">
                    <h1 class="page__title">"Featured Projects"</h1>
                    <p class="page__lead">
                        "A selection of my recent work showcasing different technologies and problem-solving approaches"
                    </p>
                </header>

                <div class="filter-bar" role="group" aria-label="Project filter">
                    {ProjectFilter::OPTIONS
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class="filter-bar__button"
                                    class:filter-bar__button--active=move || selected.get() == option
                                    on:click=move |_| selected.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <Show when=move || state.with(|s| s.error.is_some())>
                    <FetchErrorNotice what="projects" on_retry=retry/>
                </Show>

                <div class="card-grid">
                    <For
                        each=move || visible.get()
                        key=|project| project.id.clone()
                        children=|project| view! { <ProjectCard project/> }
                    />
                </div>

                <section class="cta">
                    <h2>"Interested in working together?"</h2>
                    <p>"I'm always open to discussing new opportunities and interesting projects."</p>
                    <a class="btn btn--primary" href="/contact">"Get In Touch"</a>
                </section>
            </div>
        </Show>
    }
}
