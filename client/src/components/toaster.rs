//! Toast viewport and the `push_toast` helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the app-level `RwSignal<ToastState>` context. Auto-dismissal runs
//! only in the browser; SSR never has toasts to render.

use leptos::prelude::*;

use crate::state::toast::{ToastContent, ToastState, ToastVariant};

/// Queue a toast and schedule its auto-dismissal.
pub fn push_toast(toasts: RwSignal<ToastState>, content: ToastContent) {
    let id = toasts.try_update(|t| t.push(content));
    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::toast::TOAST_DISMISS_MS))
                    .await;
                let _ = toasts.try_update(|t| t.dismiss(id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let destructive = toast.content.variant == ToastVariant::Destructive;
                    view! {
                        <li class="toast" class:toast--destructive=destructive role="status">
                            <div class="toast__body">
                                <p class="toast__title">{toast.content.title}</p>
                                <p class="toast__description">{toast.content.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(id);
                                    });
                                }
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
