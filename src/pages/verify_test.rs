use super::*;

#[test]
fn verification_params_accepts_complete_links() {
    assert_eq!(
        verification_params(Some("tok".to_owned()), Some("true".to_owned())),
        Ok(("tok".to_owned(), "true".to_owned()))
    );
}

#[test]
fn verification_params_rejects_missing_or_empty_values() {
    let err = Err("This verification link is missing its token.");
    assert_eq!(verification_params(None, Some("true".to_owned())), err);
    assert_eq!(verification_params(Some("tok".to_owned()), None), err);
    assert_eq!(
        verification_params(Some(String::new()), Some("true".to_owned())),
        err
    );
    assert_eq!(
        verification_params(Some("tok".to_owned()), Some(String::new())),
        err
    );
}
