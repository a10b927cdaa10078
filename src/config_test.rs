use super::*;

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ClientConfig::new("https://id.example.test/");
    assert_eq!(cfg.api_base_url, "https://id.example.test");

    let cfg = ClientConfig::new("https://id.example.test///");
    assert_eq!(cfg.api_base_url, "https://id.example.test");
}

#[test]
fn new_falls_back_to_default_for_blank_input() {
    assert_eq!(ClientConfig::new("   ").api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(ClientConfig::new("/").api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_raw_uses_default_when_unset() {
    assert_eq!(ClientConfig::from_raw(None).api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_raw_uses_supplied_value() {
    let cfg = ClientConfig::from_raw(Some("http://api.internal:9000/"));
    assert_eq!(cfg.api_base_url, "http://api.internal:9000");
}

#[test]
fn endpoint_joins_absolute_and_relative_paths() {
    let cfg = ClientConfig::new("http://localhost:8000");
    assert_eq!(cfg.endpoint("/auth/local/login"), "http://localhost:8000/auth/local/login");
    assert_eq!(cfg.endpoint("api/user/profile"), "http://localhost:8000/api/user/profile");
}
