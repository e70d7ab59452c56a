//! Experience page: fetched work history rendered as a timeline.

use leptos::prelude::*;

use crate::components::experience_card::ExperienceCard;
use crate::components::fetch_status::{FetchErrorNotice, LoadingPlaceholder};
use crate::net::api;
use crate::state::list_fetch::ListFetchState;
use crate::util::fetch::use_list_fetch;

const ACHIEVEMENTS: [(&str, &str, &str); 4] = [
    ("5+", "Enterprise Applications", "Led development of large-scale applications serving thousands of users"),
    ("40%", "Performance Improvement", "Optimized applications for better user experience and faster load times"),
    ("3+", "Junior Developers Mentored", "Guided team members through code reviews and technical challenges"),
    ("10K+", "Users Served", "Built applications used by thousands of active users daily"),
];

#[component]
pub fn ExperiencePage() -> impl IntoView {
    let (state, retry) = use_list_fetch("experience", api::fetch_experience);

    view! {
        <Show
            when=move || !state.with(ListFetchState::is_loading)
            fallback=|| view! { <LoadingPlaceholder label="Loading experience..."/> }
        >
            <div class="page page--narrow">
                <header class="page__header">
                    <h1 class="page__title">"Work Experience"</h1>
                    <p class="page__lead">
                        "My professional journey in frontend development and the impact I've made at each organization"
                    </p>
                </header>

                <Show when=move || state.with(|s| s.error.is_some())>
                    <FetchErrorNotice what="experience" on_retry=retry/>
                </Show>

                <ol class="timeline">
                    <For
                        each=move || state.with(|s| s.items.clone())
                        key=|experience| experience.id.clone()
                        children=|experience| view! { <ExperienceCard experience/> }
                    />
                </ol>

                <section class="summary">
                    <h2 class="summary__title">"Key Achievements"</h2>
                    <div class="summary__grid summary__grid--two">
                        {ACHIEVEMENTS
                            .iter()
                            .map(|&(figure, label, detail)| {
                                view! {
                                    <div>
                                        <div class="summary__figure">{figure}</div>
                                        <div class="summary__label">{label}</div>
                                        <p class="summary__detail">{detail}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </div>
        </Show>
    }
}
