use super::*;

fn fallback() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

#[test]
fn listen_addr_defaults_to_site_addr() {
    assert_eq!(listen_addr(None, fallback()), fallback());
}

#[test]
fn listen_addr_uses_port_override() {
    assert_eq!(listen_addr(Some("8080".to_owned()), fallback()), SocketAddr::from(([0, 0, 0, 0], 8080)));
}

#[test]
#[should_panic(expected = "invalid PORT")]
fn listen_addr_rejects_malformed_port() {
    let _ = listen_addr(Some("http".to_owned()), fallback());
}
