//! Site footer with social links, quick links and contact details.

use leptos::prelude::*;

use crate::components::navbar::NAV_ITEMS;
use crate::content::{CONTACT_EMAIL, COPYRIGHT_YEAR, LOCATION, OWNER_NAME, OWNER_ROLE, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <section class="footer__about">
                    <h3 class="footer__name">{OWNER_NAME}</h3>
                    <p class="footer__role">{OWNER_ROLE}</p>
                    <div class="footer__social">
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
                </section>
                <section class="footer__links">
                    <h4>"Quick Links"</h4>
                    <ul>
                        {NAV_ITEMS
                            .iter()
                            .filter(|(name, _)| *name != "Contact")
                            .map(|&(name, href)| view! { <li><a href=href>{name}</a></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>
                <section class="footer__contact">
                    <h4>"Get In Touch"</h4>
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    <p>{LOCATION}</p>
                    <a class="btn btn--primary" href="/contact">"Contact Me"</a>
                </section>
            </div>
            <p class="footer__copyright">
                "Made with " <span class="footer__heart">"♥"</span> {format!(" by {OWNER_NAME} © {COPYRIGHT_YEAR}")}
            </p>
        </footer>
    }
}
