//! Fetch-on-mount hook for list pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a [`ListFetchState`] in a signal, starts the read once the page is
//! mounted in the browser, and cancels the outstanding token on unmount.
//! During SSR nothing is fetched, so the server renders the same loading
//! placeholder the browser starts from.

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::state::list_fetch::ListFetchState;

/// Create page-scoped list state and kick off its read.
///
/// Returns the state signal and a retry callback that issues a fresh read.
pub fn use_list_fetch<T, F, Fut>(label: &'static str, fetch: F) -> (RwSignal<ListFetchState<T>>, Callback<()>)
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let state = RwSignal::new(ListFetchState::<T>::default());

    Effect::new(move || start_fetch(state, label, fetch));
    on_cleanup(move || {
        let _ = state.try_update(ListFetchState::cancel);
    });

    let retry = Callback::new(move |()| start_fetch(state, label, fetch));
    (state, retry)
}

fn start_fetch<T, F, Fut>(state: RwSignal<ListFetchState<T>>, label: &'static str, fetch: F)
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let Some(token) = state.try_update(ListFetchState::begin) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = fetch().await;
            if let Err(e) = &outcome {
                log::error!("Error fetching {label}: {e}");
            }
            let _ = state.try_update(|s| s.resolve(token, outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, label, fetch);
    }
}
