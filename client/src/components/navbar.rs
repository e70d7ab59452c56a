//! Top navigation bar with route highlighting and a mobile menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::content::{OWNER_INITIALS, OWNER_NAME};

/// Route table shown in the navbar and footer quick links.
pub const NAV_ITEMS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("About", "/about"),
    ("Skills", "/skills"),
    ("Projects", "/projects"),
    ("Experience", "/experience"),
    ("Contact", "/contact"),
];

/// Exact path match; `/projects/x` does not activate `/projects`.
pub(crate) fn is_active(current: &str, href: &str) -> bool {
    let current = if current.len() > 1 { current.trim_end_matches('/') } else { current };
    current == href
}

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // Close the mobile menu whenever the route changes.
    Effect::new(move || {
        pathname.track();
        menu_open.set(false);
    });

    let links = move |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|&(name, href)| {
                view! {
                    <a
                        href=href
                        class=class
                        class:navbar__link--active=move || is_active(&pathname.get(), href)
                    >
                        {name}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a href="/" class="navbar__brand">
                    <span class="navbar__logo">{OWNER_INITIALS}</span>
                    <span class="navbar__name">{OWNER_NAME}</span>
                </a>
                <div class="navbar__links">{links("navbar__link")}</div>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">{links("navbar__link navbar__link--mobile")}</div>
            </Show>
        </nav>
    }
}
