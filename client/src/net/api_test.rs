use super::*;

fn config(base: &str) -> AppConfig {
    AppConfig { api_base_url: base.to_owned(), ..AppConfig::default() }
}

#[test]
fn auth_urls_join_base_and_path() {
    let api = HttpAuthApi::new(&config("https://api.example.com"));
    assert_eq!(api.login_url(), "https://api.example.com/api/auth/login");
    assert_eq!(api.register_url(), "https://api.example.com/api/auth/register");
}

#[test]
fn endpoint_tolerates_trailing_slash() {
    assert_eq!(endpoint("http://h/", LOGIN_PATH), "http://h/api/auth/login");
}

#[test]
fn categories_url_includes_limit() {
    let url = categories_url("http://h", CategoryQuery { limit: 10, variant: None });
    assert_eq!(url, "http://h/api/categories?limit=10");
}

#[test]
fn categories_url_includes_variant() {
    let url = categories_url("http://h", CategoryQuery { limit: 5, variant: Some(DemoVariant::Ancient) });
    assert_eq!(url, "http://h/api/categories?limit=5&variant=ancient");
}

#[test]
fn demo_variant_parses_known_values_only() {
    assert_eq!(DemoVariant::parse("ancient"), Some(DemoVariant::Ancient));
    assert_eq!(DemoVariant::parse("modern"), None);
    assert_eq!(DemoVariant::parse(""), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let api = HttpAuthApi::new(&AppConfig::default());
    let req = LoginRequest {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        remember_me: false,
        device_name: "test".to_owned(),
    };
    assert_eq!(futures::executor::block_on(api.login(&req)), Err(ApiError::Unavailable));
    let categories = futures::executor::block_on(fetch_categories(
        &AppConfig::default(),
        CategoryQuery { limit: 10, variant: None },
    ));
    assert_eq!(categories, Err(ApiError::Unavailable));
}
