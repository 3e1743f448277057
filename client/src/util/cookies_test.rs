use super::*;

#[test]
fn encode_value_escapes_cookie_delimiters() {
    assert_eq!(encode_value("a;b=c d,e"), "a%3Bb%3Dc%20d%2Ce");
    assert_eq!(encode_value("1|token-_.~"), "1%7Ctoken-_.~");
}

#[test]
fn decode_value_reverses_encoding() {
    let raw = r#"{"name":"Zoë","id":7}"#;
    assert_eq!(decode_value(&encode_value(raw)), raw);
}

#[test]
fn cookie_pair_without_lifetime_is_session_scoped() {
    assert_eq!(cookie_pair("token", "abc", None), "token=abc; path=/");
}

#[test]
fn cookie_pair_with_lifetime_sets_max_age() {
    assert_eq!(
        cookie_pair("cookies_accepted", "true", Some(365)),
        "cookies_accepted=true; path=/; max-age=31536000"
    );
}

#[test]
fn expired_cookie_sets_zero_max_age() {
    assert_eq!(expired_cookie("user"), "user=; path=/; max-age=0");
}

#[test]
fn find_cookie_picks_exact_name() {
    let header = "usertype=admin; user=%7B%22id%22%3A1%7D; token=1%7Cabc";
    assert_eq!(find_cookie(header, "user").as_deref(), Some(r#"{"id":1}"#));
    assert_eq!(find_cookie(header, "token").as_deref(), Some("1|abc"));
    assert_eq!(find_cookie(header, "missing"), None);
}

#[test]
fn find_cookie_handles_empty_header() {
    assert_eq!(find_cookie("", "token"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn dom_access_is_noop_outside_browser() {
    assert_eq!(read("token"), None);
    assert!(write("token=abc; path=/").is_err());
}
