//! Loading placeholder and failed-read notice shared by list pages.

use leptos::prelude::*;

/// Spinner with a fixed label, shown while a list page is loading.
#[component]
pub fn LoadingPlaceholder(label: &'static str) -> impl IntoView {
    view! {
        <div class="page page--centered">
            <div class="loading">
                <div class="loading__spinner" aria-hidden="true"></div>
                <p class="loading__label">{label}</p>
            </div>
        </div>
    }
}

/// Inline notice after a failed read; the list below it renders empty.
#[component]
pub fn FetchErrorNotice(what: &'static str, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="fetch-error" role="alert">
            <span>{format!("Couldn't load {what}.")}</span>
            <button class="btn btn--outline" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
