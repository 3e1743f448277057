use super::*;

#[test]
fn defaults_point_at_remote_host_with_marker() {
    let config = AppConfig::default();
    assert_eq!(config.api_base_url, "http://38.180.11.233");
    assert_eq!(config.email_marker, Some('#'));
    assert_eq!(config.category_limit, 10);
}

#[test]
fn base_url_is_trimmed_of_trailing_slashes() {
    let config = AppConfig::from_raw(Some(" https://shop.example.com// "), None);
    assert_eq!(config.api_base_url, "https://shop.example.com");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    let config = AppConfig::from_raw(Some("   "), None);
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn empty_marker_disables_suffix() {
    let config = AppConfig::from_raw(None, Some(""));
    assert_eq!(config.email_marker, None);
}

#[test]
fn marker_uses_first_character_only() {
    let config = AppConfig::from_raw(None, Some("!?"));
    assert_eq!(config.email_marker, Some('!'));
}
