use super::*;

#[test]
fn usable_credential_keeps_token() {
    assert_eq!(usable_credential(Some("eyJhbGciOi".to_owned())), Some("eyJhbGciOi".to_owned()));
}

#[test]
fn usable_credential_drops_missing_or_blank() {
    assert_eq!(usable_credential(None), None);
    assert_eq!(usable_credential(Some("  ".to_owned())), None);
}
