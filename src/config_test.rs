use super::*;

#[test]
fn from_values_defaults_to_local_backend() {
    let cfg = AuthConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, AuthConfig::default());
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.dashboard_route, DASHBOARD_ROUTE);
    assert_eq!(cfg.google_client_id, None);
}

#[test]
fn from_values_trims_trailing_slash() {
    let cfg = AuthConfig::from_values(Some("https://api.aeddi.test/"), None).unwrap();
    assert_eq!(cfg.api_url, "https://api.aeddi.test");
}

#[test]
fn from_values_treats_blank_values_as_unset() {
    let cfg = AuthConfig::from_values(Some("   "), Some("  ")).unwrap();
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.google_client_id, None);
}

#[test]
fn from_values_keeps_google_client_id() {
    let cfg = AuthConfig::from_values(None, Some(" 123.apps.googleusercontent.com ")).unwrap();
    assert_eq!(cfg.google_client_id.as_deref(), Some("123.apps.googleusercontent.com"));
}

#[test]
fn from_values_rejects_non_http_url() {
    let err = AuthConfig::from_values(Some("ftp://api.aeddi.test"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidApiUrl("ftp://api.aeddi.test".to_owned()));
    assert_eq!(err.to_string(), "invalid API URL: ftp://api.aeddi.test");
}

// =============================================================
// Endpoint URLs
// =============================================================

#[test]
fn endpoint_urls_join_base_and_path() {
    let cfg = AuthConfig::from_values(Some("https://api.aeddi.test"), None).unwrap();
    assert_eq!(cfg.login_url(), "https://api.aeddi.test/api/auth/login");
    assert_eq!(cfg.google_callback_url(), "https://api.aeddi.test/api/auth/google/callback");
}

#[test]
fn redirect_url_per_provider() {
    let cfg = AuthConfig::from_values(Some("https://api.aeddi.test"), None).unwrap();
    assert_eq!(
        cfg.redirect_url(OAuthProvider::Google),
        "https://api.aeddi.test/api/auth/google/redirect"
    );
    assert_eq!(
        cfg.redirect_url(OAuthProvider::Facebook),
        "https://api.aeddi.test/api/auth/facebook/redirect"
    );
}
