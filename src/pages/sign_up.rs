//! Sign-up page: collects credentials and submits them to the auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the sign-up form state: per-field errors plus the
//! in-flight submission flag. Editing a field clears its own stale error;
//! only a submission outcome sets one. Presence of both fields is enforced
//! by the `required` inputs, so the submit handler does not re-validate.

use leptos::prelude::*;

use crate::components::field_input::FieldInput;
use crate::components::navbar::Navbar;
use crate::state::form::{Field, SignUpFormState};
#[cfg(feature = "hydrate")]
use crate::state::form::SignUpOutcome;

/// Sign-up form page.
///
/// Submission posts the literal field values to the auth service and maps
/// the verdict onto per-field errors; transport failures are logged and
/// leave the form unchanged.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(SignUpFormState::default());

    let on_email_edit = Callback::new(move |()| form.update(|f| f.field_edited(Field::Email)));
    let on_password_edit = Callback::new(move |()| form.update(|f| f.field_edited(Field::Password)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut started = false;
        form.update(|f| started = f.begin_submit());
        if !started {
            return;
        }

        let email_value = email.get();
        let password_value = password.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_up(&email_value, &password_value).await {
                Ok(SignUpOutcome::Success) => {
                    form.update(|f| f.apply_outcome(SignUpOutcome::Success));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/signin");
                    }
                }
                Ok(outcome) => form.update(|f| f.apply_outcome(outcome)),
                Err(e) => {
                    leptos::logging::warn!("sign-up request failed: {e}");
                    form.update(|f| f.submit_failed());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            form.update(|f| f.submit_failed());
        }
    };

    let email_error =
        Signal::derive(move || form.get().errors.get(Field::Email).map(ToOwned::to_owned));
    let password_error =
        Signal::derive(move || form.get().errors.get(Field::Password).map(ToOwned::to_owned));

    view! {
        <div class="account-page">
            <Navbar/>
            <form class="account-form" on:submit=on_submit>
                <h2>"Sign up."</h2>
                <FieldInput
                    label="Email Address"
                    input_type="email"
                    name="email"
                    value=email
                    error=email_error
                    on_edit=on_email_edit
                />
                <FieldInput
                    label="Password"
                    input_type="password"
                    name="password"
                    value=password
                    error=password_error
                    on_edit=on_password_edit
                />
                <div class="input-group">
                    <button
                        class="button-primary"
                        type="submit"
                        disabled=move || form.get().submitting
                    >
                        "Continue"
                    </button>
                </div>
                <div class="input-group">
                    <div>
                        <a href="/reset">"Forgot your password?"</a>
                    </div>
                    <div>"Already have an account? " <a href="/signin">"Sign in."</a></div>
                </div>
            </form>
        </div>
    }
}
