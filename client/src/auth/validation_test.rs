use super::*;

// =============================================================
// Email pattern
// =============================================================

#[test]
fn accepts_ordinary_addresses() {
    for email in ["user@example.com", "first.last@shop.co.uk", "a+tag@sub-domain.io", "x@y.zz"] {
        assert!(is_valid_email(email), "expected valid: {email}");
    }
}

#[test]
fn accepts_quoted_local_part_and_ip_literal() {
    assert!(is_valid_email(r#""john doe"@example.com"#));
    assert!(is_valid_email("user@[192.168.0.1]"));
}

#[test]
fn rejects_malformed_addresses() {
    for email in ["", "user", "user@", "@example.com", "user@example", "user@example.c", "a b@example.com", "a..b@example.com", "user@example.com#"] {
        assert!(!is_valid_email(email), "expected invalid: {email}");
    }
}

// =============================================================
// FieldErrors
// =============================================================

#[test]
fn require_flags_empty_values() {
    let mut errors = FieldErrors::default();
    errors.require(Field::Name, "");
    errors.require(Field::Phone, "0100");
    assert_eq!(errors.errors(), &[FieldError::Required(Field::Name)]);
    assert_eq!(errors.message(Field::Name).as_deref(), Some("Name is required"));
    assert_eq!(errors.message(Field::Phone), None);
}

#[test]
fn require_accepts_whitespace_only_values() {
    let mut errors = FieldErrors::default();
    errors.require(Field::Password, "   ");
    errors.require(Field::Name, " ");
    assert!(errors.is_empty());
}

#[test]
fn require_email_rejects_surrounding_whitespace() {
    let mut errors = FieldErrors::default();
    errors.require_email(" a@b.io ");
    assert_eq!(errors.errors(), &[FieldError::InvalidEmail]);
}

#[test]
fn require_email_distinguishes_missing_from_invalid() {
    let mut missing = FieldErrors::default();
    missing.require_email("");
    assert_eq!(missing.errors(), &[FieldError::Required(Field::Email)]);

    let mut invalid = FieldErrors::default();
    invalid.require_email("not-an-email");
    assert_eq!(invalid.errors(), &[FieldError::InvalidEmail]);
    assert_eq!(invalid.message(Field::Email).as_deref(), Some("Please provide a valid email address"));
}

#[test]
fn into_result_is_ok_only_when_empty() {
    assert_eq!(FieldErrors::default().into_result(), Ok(()));
    let mut errors = FieldErrors::default();
    errors.require(Field::Password, "");
    assert!(errors.into_result().is_err());
}
