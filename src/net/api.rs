//! Auth service API client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the account endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and unexpected statuses surface as `Err(String)` so
//! each page decides whether to show or just log them. A duplicate-email
//! rejection on sign-up is not an error: it maps to
//! `SignUpOutcome::Rejected` field errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use crate::net::types::Credentials;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::form::FieldErrors;
use crate::state::form::SignUpOutcome;

/// Auth service host. The service is deployed separately from the static
/// frontend, so endpoints are absolute.
#[cfg(any(test, feature = "hydrate"))]
const API_BASE: &str = "http://64.225.125.174";

/// Inline message shown when sign-up is rejected for a taken email.
pub const EMAIL_IN_USE_MESSAGE: &str = "This email has already been used.";

/// Text the auth service returns for a duplicate email on sign-up.
#[cfg(any(test, feature = "hydrate"))]
const DUPLICATE_EMAIL_BODY: &str = "Email already exists";

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint() -> String {
    format!("{API_BASE}/api/signup")
}

#[cfg(any(test, feature = "hydrate"))]
fn signin_endpoint() -> String {
    format!("{API_BASE}/api/signin")
}

#[cfg(any(test, feature = "hydrate"))]
fn reset_endpoint() -> String {
    format!("{API_BASE}/api/reset")
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_endpoint(token: &str, invalid: &str) -> String {
    format!("{API_BASE}/api/verify?token={token}&invalid={invalid}")
}

/// Map a sign-up response onto an outcome.
///
/// The service reports a taken email as a 400 with a plain-text body; that
/// is the only rejection it attributes to a field, so it is the only one
/// that becomes a field error.
#[cfg(any(test, feature = "hydrate"))]
fn map_signup_response(status: u16, body: &str) -> Result<SignUpOutcome, String> {
    if (200..300).contains(&status) {
        return Ok(SignUpOutcome::Success);
    }
    if status == 400 && body.trim_start().starts_with(DUPLICATE_EMAIL_BODY) {
        return Ok(SignUpOutcome::Rejected(FieldErrors::email(
            EMAIL_IN_USE_MESSAGE,
        )));
    }
    Err(format!("sign-up request failed: {status}"))
}

/// Map a sign-in status onto a user-facing result.
#[cfg(any(test, feature = "hydrate"))]
fn map_signin_status(status: u16) -> Result<(), String> {
    match status {
        s if (200..300).contains(&s) => Ok(()),
        401 => Err("Incorrect email or password.".to_owned()),
        s => Err(format!("sign-in request failed: {s}")),
    }
}

/// Map a reset-password status onto a user-facing result.
///
/// The service authenticates the caller before issuing a reset token, so
/// a 401 here means the current credentials were wrong.
#[cfg(any(test, feature = "hydrate"))]
fn map_reset_status(status: u16) -> Result<(), String> {
    match status {
        s if (200..300).contains(&s) => Ok(()),
        401 => Err("Incorrect email or password.".to_owned()),
        s => Err(format!("reset request failed: {s}")),
    }
}

/// Submit sign-up credentials via `POST /api/signup`.
///
/// # Errors
///
/// `Err` means the request itself failed (transport error or an unexpected
/// status); callers log it rather than surfacing it as a field error.
pub async fn sign_up(email: &str, password: &str) -> Result<SignUpOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = Credentials {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&signup_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let body = resp.text().await.unwrap_or_default();
        map_signup_response(resp.status(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Sign in via `POST /api/signin`.
///
/// # Errors
///
/// Returns a user-facing message for wrong credentials, transport
/// failures, or unexpected statuses.
pub async fn sign_in(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = Credentials {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&signin_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        map_signin_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Request a password-reset token via `POST /api/reset`.
///
/// The service emails the token to the account address on success.
///
/// # Errors
///
/// Returns a user-facing message for wrong credentials, transport
/// failures, or unexpected statuses.
pub async fn request_password_reset(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = Credentials {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&reset_endpoint())
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        map_reset_status(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Forward an emailed verification token via `POST /api/verify`.
///
/// The `invalid` flag travels verbatim from the verification link; the
/// service decides whether to verify or discard the account.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn verify_email(token: &str, invalid: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&verify_endpoint(token, invalid))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("verification failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, invalid);
        Err("not available on server".to_owned())
    }
}
