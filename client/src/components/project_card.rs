//! Card for one project with technology badges and outbound links.

use leptos::prelude::*;

use crate::net::types::ProjectRecord;
use crate::util::format::project_image_url;

#[component]
pub fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let image = project_image_url(&project);
    let featured = project.featured;
    let github_url = project.github_url.clone();
    let live_url = project.live_url.clone();

    view! {
        <article class="card project-card">
            <div class="project-card__media">
                <img src=image alt=project.title.clone() loading="lazy"/>
                <Show when=move || featured>
                    <span class="badge badge--featured">"★ Featured"</span>
                </Show>
            </div>
            <header class="project-card__header">
                <h3 class="card__title">{project.title}</h3>
                <p class="card__subtitle project-card__description">{project.description}</p>
            </header>
            <div class="project-card__tech">
                {project
                    .technologies
                    .into_iter()
                    .map(|tech| view! { <span class="badge badge--muted">{tech}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="project-card__actions">
                {github_url
                    .map(|url| {
                        view! {
                            <a class="btn btn--outline" href=url target="_blank" rel="noopener noreferrer">
                                "Code"
                            </a>
                        }
                    })}
                {live_url
                    .map(|url| {
                        view! {
                            <a class="btn btn--primary" href=url target="_blank" rel="noopener noreferrer">
                                "Live Demo"
                            </a>
                        }
                    })}
            </div>
        </article>
    }
}
