use super::*;

#[test]
fn validate_sign_in_input_trims_email_only() {
    assert_eq!(
        validate_sign_in_input("  user@example.com  ", " pw "),
        Ok(("user@example.com".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_sign_in_input_requires_both_fields() {
    assert_eq!(
        validate_sign_in_input("   ", "pw123"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_sign_in_input("a@b.com", ""),
        Err("Enter both email and password.")
    );
}
