use super::*;

#[test]
fn validate_reset_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_reset_input(" user@example.com ", "current-pw"),
        Ok(("user@example.com".to_owned(), "current-pw".to_owned()))
    );
}

#[test]
fn validate_reset_input_requires_both_fields() {
    assert_eq!(
        validate_reset_input("", "pw"),
        Err("Enter your email and current password.")
    );
    assert_eq!(
        validate_reset_input("a@b.com", ""),
        Err("Enter your email and current password.")
    );
}
