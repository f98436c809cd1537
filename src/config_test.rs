use super::*;

#[test]
fn default_points_at_api_root() {
    let config = AuthConfig::default();
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.base_href, "/");
}

#[test]
fn login_path_joins_base_href() {
    let config = AuthConfig::default();
    assert_eq!(config.login_path(), "/oauth2/authorization/okta");
}

#[test]
fn login_path_handles_nested_base_href() {
    let config = AuthConfig {
        base_href: "/booking/".to_owned(),
        ..AuthConfig::default()
    };
    assert_eq!(config.login_path(), "/booking/oauth2/authorization/okta");
}

#[test]
fn login_path_inserts_missing_slash() {
    let config = AuthConfig {
        base_href: "/booking".to_owned(),
        ..AuthConfig::default()
    };
    assert_eq!(config.login_path(), "/booking/oauth2/authorization/okta");
}
