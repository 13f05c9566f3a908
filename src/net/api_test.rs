use super::*;
use crate::state::form::Field;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn signup_endpoint_targets_fixed_host() {
    assert_eq!(signup_endpoint(), "http://64.225.125.174/api/signup");
}

#[test]
fn signin_and_reset_endpoints_target_fixed_host() {
    assert_eq!(signin_endpoint(), "http://64.225.125.174/api/signin");
    assert_eq!(reset_endpoint(), "http://64.225.125.174/api/reset");
}

#[test]
fn verify_endpoint_carries_query_parameters() {
    assert_eq!(
        verify_endpoint("abc123", "true"),
        "http://64.225.125.174/api/verify?token=abc123&invalid=true"
    );
}

// =============================================================
// Sign-up response mapping
// =============================================================

#[test]
fn map_signup_response_success_on_2xx() {
    assert_eq!(map_signup_response(200, ""), Ok(SignUpOutcome::Success));
    assert_eq!(map_signup_response(204, ""), Ok(SignUpOutcome::Success));
}

#[test]
fn map_signup_response_duplicate_email_sets_only_email_field() {
    let outcome =
        map_signup_response(400, "Email already exists\n").expect("field rejection is not an error");
    let SignUpOutcome::Rejected(errors) = outcome else {
        panic!("expected a rejection");
    };
    assert_eq!(errors.get(Field::Email), Some(EMAIL_IN_USE_MESSAGE));
    assert!(errors.get(Field::Password).is_none());
}

#[test]
fn map_signup_response_server_error_is_not_a_field_error() {
    let err = map_signup_response(500, "internal error").expect_err("expected request failure");
    assert!(err.contains("500"));
}

#[test]
fn map_signup_response_unrelated_400_is_a_request_failure() {
    assert!(map_signup_response(400, "unexpected EOF").is_err());
}

// =============================================================
// Sign-in / reset status mapping
// =============================================================

#[test]
fn map_signin_status_unauthorized_yields_credentials_message() {
    assert_eq!(map_signin_status(200), Ok(()));
    assert_eq!(
        map_signin_status(401),
        Err("Incorrect email or password.".to_owned())
    );
}

#[test]
fn map_signin_status_other_failures_carry_status() {
    let err = map_signin_status(503).expect_err("expected request failure");
    assert!(err.contains("503"));
}

#[test]
fn map_reset_status_mirrors_signin_semantics() {
    assert_eq!(map_reset_status(200), Ok(()));
    assert_eq!(
        map_reset_status(401),
        Err("Incorrect email or password.".to_owned())
    );
    assert!(map_reset_status(500).is_err());
}
