//! Landing page hero.

use leptos::prelude::*;

use crate::content::{HERO_BLURB, HERO_HIGHLIGHTS, HERO_IMAGE_URL, OWNER_NAME, OWNER_ROLE, SOCIAL_LINKS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__text">
                <h1 class="hero__title">
                    "Hi, I'm " <span class="hero__name">{OWNER_NAME}</span>
                </h1>
                <p class="hero__role">{OWNER_ROLE}</p>
                <p class="hero__blurb">{HERO_BLURB}</p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/projects">"View My Work"</a>
                    <a class="btn btn--outline" href="/contact">"Get In Touch"</a>
                </div>
                <div class="hero__social">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    class="social-link"
                                    href=link.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.name
                                >
                                    {link.glyph}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            <div class="hero__visual">
                <img class="hero__image" src=HERO_IMAGE_URL alt="Developer workspace"/>
                <div class="hero__highlights">
                    {HERO_HIGHLIGHTS
                        .iter()
                        .map(|h| {
                            view! {
                                <div class="hero__highlight">
                                    <div class="hero__highlight-title">{h.title}</div>
                                    <div class="hero__highlight-caption">{h.caption}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
