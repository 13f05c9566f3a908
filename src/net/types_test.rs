use super::*;

#[test]
fn credentials_serialize_with_literal_field_values() {
    let body = serde_json::to_string(&Credentials {
        email: "a@b.com".to_owned(),
        password: "pw123".to_owned(),
    })
    .expect("serialize credentials");
    assert_eq!(body, r#"{"email":"a@b.com","password":"pw123"}"#);
}

#[test]
fn credentials_are_not_trimmed_or_normalized() {
    let body = serde_json::to_string(&Credentials {
        email: "A@B.com".to_owned(),
        password: " spaced pw ".to_owned(),
    })
    .expect("serialize credentials");
    assert_eq!(body, r#"{"email":"A@B.com","password":" spaced pw "}"#);
}
