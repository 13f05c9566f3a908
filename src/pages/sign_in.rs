//! Sign-in page for existing accounts.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Trim the email and require both inputs to be present.
///
/// The password is passed through untrimmed; surrounding whitespace may be
/// part of it.
fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Sign-in form page.
#[component]
pub fn SignInPage() -> impl IntoView {
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
            match validate_sign_in_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&email_value, &password_value).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(e) => {
                    info.set(e);
                    busy.set(false);
                }
            }
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
                <h2>"Sign in."</h2>
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
                    <div class="input-title">"Password"</div>
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
                        "Continue"
                    </button>
                </div>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
                <div class="input-group">
                    <div>
                        <a href="/reset">"Forgot your password?"</a>
                    </div>
                    <div>"New here? " <a href="/signup">"Sign up."</a></div>
                </div>
            </form>
        </div>
    }
}
