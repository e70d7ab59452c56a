//! About page: biography, values, interests and quick facts.

use leptos::prelude::*;

use crate::content::{INSPIRATION, INTERESTS, PORTRAIT_URL, QUICK_FACTS, STORY, VALUES};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"About Me"</h1>
                <p class="page__lead">
                    "Passionate frontend developer with a love for creating beautiful, functional, and user-centered digital experiences"
                </p>
            </header>

            <div class="about">
                <div class="about__main">
                    <section class="card">
                        <h2 class="card__title">"My Story"</h2>
                        {STORY.iter().map(|p| view! { <p class="card__text">{*p}</p> }).collect::<Vec<_>>()}
                    </section>

                    <section class="card">
                        <h2 class="card__title">"What Inspires Me"</h2>
                        {INSPIRATION.iter().map(|p| view! { <p class="card__text">{*p}</p> }).collect::<Vec<_>>()}
                    </section>

                    <section>
                        <h2 class="section__title">"My Values"</h2>
                        <div class="card-grid card-grid--two">
                            {VALUES
                                .iter()
                                .map(|v| {
                                    view! {
                                        <div class="card">
                                            <h3 class="card__subtitle">{v.title}</h3>
                                            <p class="card__text">{v.description}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>
                </div>

                <aside class="about__side">
                    <section class="card card--center">
                        <img class="about__portrait" src=PORTRAIT_URL alt="Profile portrait"/>
                    </section>

                    <section class="card">
                        <h2 class="card__title">"Interests"</h2>
                        <div class="tag-list">
                            {INTERESTS.iter().map(|i| view! { <span class="tag">{*i}</span> }).collect::<Vec<_>>()}
                        </div>
                    </section>

                    <section class="card">
                        <h2 class="card__title">"Quick Facts"</h2>
                        <dl class="facts">
                            {QUICK_FACTS
                                .iter()
                                .map(|&(label, value)| {
                                    view! {
                                        <div class="facts__row">
                                            <dt>{label}</dt>
                                            <dd>{value}</dd>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </dl>
                    </section>
                </aside>
            </div>
        </div>
    }
}
