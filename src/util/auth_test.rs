use super::*;
use serde_json::json;

#[test]
fn missing_session_redirects_to_login() {
    assert_eq!(unauth_redirect_target(None), Some("/login"));
}

#[test]
fn stored_session_stays_put() {
    let session = Session { token: "t1".into(), user: json!({"id": 1}) };
    assert_eq!(unauth_redirect_target(Some(&session)), None);
}
