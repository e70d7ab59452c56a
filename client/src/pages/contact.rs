//! Contact page: message form plus static contact details.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submission flows through `ContactFormState`; the outcome is reported via
//! the app-level toaster so it survives navigating away mid-request.

use leptos::prelude::*;

use crate::components::toaster::push_toast;
use crate::content::{AVAILABILITY, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_LINK, LOCATION, SOCIAL_LINKS};
use crate::state::contact_form::{ContactField, ContactFormState};
use crate::state::toast::ToastState;

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = form.try_update(ContactFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_contact(&payload).await;
            if let Err(e) = &outcome {
                log::error!("Error submitting contact form: {e}");
            }
            // The form may be gone if the visitor navigated away; the toast is not.
            let content = form
                .try_update(|f| f.finish_submit(outcome.clone()))
                .unwrap_or_else(|| crate::state::contact_form::outcome_toast(&outcome));
            push_toast(toasts, content);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, toasts);
        }
    };

    let input = move |field: ContactField, id: &'static str, kind: &'static str, placeholder: &'static str| {
        view! {
            <input
                id=id
                name=id
                type=kind
                class="form__input"
                placeholder=placeholder
                required
                prop:value=move || form.with(|f| f.field(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"Get In Touch"</h1>
                <p class="page__lead">
                    "Have a project in mind or just want to chat? I'd love to hear from you. Let's create something amazing together!"
                </p>
            </header>

            <div class="contact">
                <section class="contact__form card">
                    <h2 class="card__title">"Send Me a Message"</h2>
                    <form class="form" on:submit=on_submit>
                        <div class="form__row">
                            <label class="form__field">
                                <span class="form__label">"Name *"</span>
                                {input(ContactField::Name, "name", "text", "Your full name")}
                            </label>
                            <label class="form__field">
                                <span class="form__label">"Email *"</span>
                                {input(ContactField::Email, "email", "email", "your.email@example.com")}
                            </label>
                        </div>
                        <label class="form__field">
                            <span class="form__label">"Subject *"</span>
                            {input(ContactField::Subject, "subject", "text", "What's this about?")}
                        </label>
                        <label class="form__field">
                            <span class="form__label">"Message *"</span>
                            <textarea
                                id="message"
                                name="message"
                                class="form__input form__textarea"
                                rows="6"
                                placeholder="Tell me about your project or just say hello..."
                                required
                                prop:value=move || form.with(|f| f.fields.message.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.set_field(ContactField::Message, event_target_value(&ev)));
                                }
                            ></textarea>
                        </label>
                        <button
                            type="submit"
                            class="btn btn--primary btn--block"
                            disabled=move || form.with(ContactFormState::is_submitting)
                        >
                            {move || if form.with(ContactFormState::is_submitting) { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </section>

                <aside class="contact__details">
                    <section class="card">
                        <h2 class="card__title">"Contact Information"</h2>
                        <ul class="contact__list">
                            <li>
                                <span class="contact__label">"Email"</span>
                                <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                            </li>
                            <li>
                                <span class="contact__label">"Phone"</span>
                                <a href=CONTACT_PHONE_LINK>{CONTACT_PHONE}</a>
                            </li>
                            <li>
                                <span class="contact__label">"Location"</span>
                                <span>{LOCATION}</span>
                            </li>
                        </ul>
                    </section>

                    <section class="card">
                        <h2 class="card__title">"Follow Me"</h2>
                        <div class="contact__social">
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

                    <section class="card card--accent">
                        <h2 class="card__title">"Availability"</h2>
                        <ul class="contact__availability">
                            {AVAILABILITY.iter().map(|line| view! { <li>{*line}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </section>
                </aside>
            </div>
        </div>
    }
}
