//! Reset-password page.
//!
//! The auth service authenticates the caller with their current
//! credentials before emailing a reset token, so this form asks for both
//! the email and the current password.

#[cfg(test)]
#[path = "reset_test.rs"]
mod reset_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Trim the email and require both inputs to be present.
fn validate_reset_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and current password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Reset-password form page.
#[component]
pub fn ResetPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_reset_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Requesting reset token...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&email_value, &password_value).await {
                Ok(()) => info.set("Check your email for a reset token.".to_owned()),
                Err(e) => info.set(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="account-page">
            <Navbar/>
            <form class="account-form" on:submit=on_submit>
                <h2>"Reset your password."</h2>
                <div class="input-group">
                    <div class="input-title">"Email Address"</div>
                    <input
                        type="email"
                        name="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-group">
                    <div class="input-title">"Current Password"</div>
                    <input
                        type="password"
                        name="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <div class="input-group">
                    <button class="button-primary" type="submit" disabled=move || busy.get()>
                        "Send reset token"
                    </button>
                </div>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
                <div class="input-group">
                    <div>"Remembered it? " <a href="/signin">"Sign in."</a></div>
                </div>
            </form>
        </div>
    }
}
