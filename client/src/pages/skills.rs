//! Skills page: fetched skill list with a category filter.

use leptos::prelude::*;

use crate::components::fetch_status::{FetchErrorNotice, LoadingPlaceholder};
use crate::components::skill_card::SkillCard;
use crate::net::api;
use crate::state::list_fetch::ListFetchState;
use crate::util::fetch::use_list_fetch;
use crate::util::filter::{SkillFilter, apply_filter};

#[component]
pub fn SkillsPage() -> impl IntoView {
    let (state, retry) = use_list_fetch("skills", api::fetch_skills);
    let selected = RwSignal::new(SkillFilter::All);
    let visible = Memo::new(move |_| state.with(|s| apply_filter(&s.items, &selected.get())));

    view! {
        <Show
            when=move || !state.with(ListFetchState::is_loading)
            fallback=|| view! { <LoadingPlaceholder label="Loading skills..."/> }
        >
            <div class="page">
                <header class="page__header">
                    <h1 class="page__title">"Skills & Technologies"</h1>
                    <p class="page__lead">
                        "A comprehensive overview of my technical skills and proficiency levels across different domains"
                    </p>
                </header>

                <div class="filter-bar" role="group" aria-label="Skill category">
                    {SkillFilter::OPTIONS
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
                    <FetchErrorNotice what="skills" on_retry=retry/>
                </Show>

                <div class="card-grid">
                    <For
                        each=move || visible.get()
                        key=|skill| skill.id.clone()
                        children=|skill| view! { <SkillCard skill/> }
                    />
                </div>

                <section class="summary">
                    <h2 class="summary__title">"Technical Expertise"</h2>
                    <div class="summary__grid">
                        <div>
                            <h3>"Frontend Focus"</h3>
                            <p>
                                "Specialized in React, JavaScript, and modern CSS frameworks to create responsive, interactive user interfaces."
                            </p>
                        </div>
                        <div>
                            <h3>"Backend Knowledge"</h3>
                            <p>
                                "Solid understanding of Node.js, Express, and database technologies to build full-stack applications."
                            </p>
                        </div>
                        <div>
                            <h3>"Development Tools"</h3>
                            <p>
                                "Proficient with Git, Webpack, and design tools like Figma to streamline development workflow."
                            </p>
                        </div>
                    </div>
                </section>
            </div>
        </Show>
    }
}
