//! Email-verification landing page.
//!
//! The verification email links here with `token` and `invalid` query
//! parameters; the page forwards them to the auth service once on load and
//! reports the outcome.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::navbar::Navbar;

/// Extract the verification parameters from the query string.
fn verification_params(
    token: Option<String>,
    invalid: Option<String>,
) -> Result<(String, String), &'static str> {
    match (token, invalid) {
        (Some(token), Some(invalid)) if !token.is_empty() && !invalid.is_empty() => {
            Ok((token, invalid))
        }
        _ => Err("This verification link is missing its token."),
    }
}

/// Verification page: submits the emailed token exactly once.
#[component]
pub fn VerifyPage() -> impl IntoView {
    let query = use_query_map();
    let status = RwSignal::new("Verifying...".to_owned());
    let requested = RwSignal::new(false);

    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);

        let params = query.get_untracked();
        match verification_params(params.get("token"), params.get("invalid")) {
            Ok((token, invalid)) => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::api::verify_email(&token, &invalid).await {
                        Ok(()) => status.set(
                            "Your email address has been verified. You can sign in now.".to_owned(),
                        ),
                        Err(e) => status.set(format!("Verification failed: {e}")),
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (token, invalid);
                }
            }
            Err(message) => status.set(message.to_owned()),
        }
    });

    view! {
        <div class="account-page">
            <Navbar/>
            <div class="account-form">
                <h2>"Email verification."</h2>
                <p class="form-message">{move || status.get()}</p>
                <div class="input-group">
                    <div>
                        <a href="/signin">"Back to sign in."</a>
                    </div>
                </div>
            </div>
        </div>
    }
}
