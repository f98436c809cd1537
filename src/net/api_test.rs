use super::*;

#[test]
fn status_is_only_set_for_http_errors() {
    assert_eq!(AuthError::Status(500).status(), Some(500));
    assert_eq!(AuthError::Network("down".to_owned()).status(), None);
    assert_eq!(AuthError::Decode("bad json".to_owned()).status(), None);
}

#[test]
fn unauthorized_matches_401_only() {
    assert!(AuthError::Status(401).is_unauthorized());
    assert!(!AuthError::Status(403).is_unauthorized());
    assert!(!AuthError::Network("down".to_owned()).is_unauthorized());
}

#[test]
fn errors_render_for_display() {
    assert_eq!(
        AuthError::Status(500).to_string(),
        "request failed with status 500"
    );
    assert_eq!(
        AuthError::Network("down".to_owned()).to_string(),
        "network error: down"
    );
}
