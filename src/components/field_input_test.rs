use super::*;

#[test]
fn group_class_flags_error_state() {
    assert_eq!(group_class(false), "input-group");
    assert_eq!(group_class(true), "input-group input-error");
}
