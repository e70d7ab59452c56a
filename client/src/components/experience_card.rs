//! Timeline entry for one position.

use leptos::prelude::*;

use crate::net::types::ExperienceRecord;
use crate::util::format::date_range_label;

#[component]
pub fn ExperienceCard(experience: ExperienceRecord) -> impl IntoView {
    let range = date_range_label(&experience);
    let current = experience.is_current;

    view! {
        <li class="timeline__item">
            <span class="timeline__dot" class:timeline__dot--current=current aria-hidden="true"></span>
            <article class="card experience-card">
                <header class="experience-card__header">
                    <div>
                        <h3 class="card__title">{experience.title}</h3>
                        <p class="experience-card__company">{experience.company}</p>
                    </div>
                    <div class="experience-card__meta">
                        <span class="badge" class:badge--current=current>{range}</span>
                        <span class="experience-card__location">{experience.location}</span>
                    </div>
                </header>
                <ul class="experience-card__bullets">
                    {experience
                        .description
                        .into_iter()
                        .map(|item| view! { <li>{item}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </article>
        </li>
    }
}
