use super::*;
use crate::auth::validation::FieldError;

fn filled_login() -> LoginForm {
    LoginForm {
        email: "shopper@example.com".to_owned(),
        password: "hunter2".to_owned(),
        remember_me: true,
        ..LoginForm::default()
    }
}

fn filled_sign_up() -> SignUpForm {
    SignUpForm {
        name: "Mona".to_owned(),
        email: "mona@example.com".to_owned(),
        phone: "+201000000000".to_owned(),
        password: "pw".to_owned(),
        ..SignUpForm::default()
    }
}

// =============================================================
// mark_email
// =============================================================

#[test]
fn mark_email_appends_marker() {
    assert_eq!(mark_email("a@b.com", Some('#')), "a@b.com#");
}

#[test]
fn mark_email_without_marker_is_identity() {
    assert_eq!(mark_email("a@b.com", None), "a@b.com");
}

// =============================================================
// LoginForm
// =============================================================

#[test]
fn login_begin_builds_marked_request() {
    let mut form = filled_login();
    let req = form.begin(Some('#'), "UA/1.0").unwrap();
    assert_eq!(req.email, "shopper@example.com#");
    assert_eq!(req.password, "hunter2");
    assert!(req.remember_me);
    assert_eq!(req.device_name, "UA/1.0");
    assert_eq!(form.phase, SubmitPhase::Submitting);
}

#[test]
fn login_begin_rejects_missing_password() {
    let mut form = LoginForm { password: String::new(), ..filled_login() };
    let errors = form.begin(Some('#'), "UA").unwrap_err();
    assert_eq!(errors.errors(), &[FieldError::Required(Field::Password)]);
    assert_eq!(form.phase, SubmitPhase::Idle);
    assert_eq!(form.field_errors, errors);
}

#[test]
fn login_begin_sends_whitespace_password_as_typed() {
    let mut form = LoginForm { email: "a@b.io".to_owned(), password: "   ".to_owned(), ..LoginForm::default() };
    let req = form.begin(Some('#'), "UA").unwrap();
    assert_eq!(req.email, "a@b.io#");
    assert_eq!(req.password, "   ");
    assert_eq!(form.phase, SubmitPhase::Submitting);
}

#[test]
fn login_begin_rejects_bad_email() {
    let mut form = LoginForm { email: "nope".to_owned(), ..filled_login() };
    let errors = form.begin(None, "UA").unwrap_err();
    assert_eq!(errors.errors(), &[FieldError::InvalidEmail]);
}

#[test]
fn login_begin_clears_previous_message() {
    let mut form = LoginForm { error_message: Some("old".to_owned()), ..filled_login() };
    form.begin(None, "UA").unwrap();
    assert_eq!(form.error_message, None);
}

#[test]
fn login_finish_rejected_resets_and_shows_message() {
    let mut form = filled_login();
    form.begin(Some('#'), "UA").unwrap();
    form.finish(&SubmitOutcome::Rejected("Bad credentials.".to_owned()));
    assert_eq!(form.phase, SubmitPhase::Idle);
    assert_eq!(form.email, "");
    assert_eq!(form.password, "");
    assert!(!form.remember_me);
    assert_eq!(form.error_message.as_deref(), Some("Bad credentials."));
}

#[test]
fn login_finish_failed_keeps_inputs_and_stays_silent() {
    let mut form = filled_login();
    form.begin(Some('#'), "UA").unwrap();
    form.finish(&SubmitOutcome::Failed);
    assert_eq!(form.phase, SubmitPhase::Idle);
    assert_eq!(form.email, " shopper@example.com ");
    assert_eq!(form.error_message, None);
}

// =============================================================
// SignUpForm
// =============================================================

#[test]
fn sign_up_begin_builds_request_without_marker() {
    let mut form = filled_sign_up();
    let req = form.begin("UA").unwrap();
    assert_eq!(req.email, "mona@example.com");
    assert_eq!(req.user_type, DEFAULT_USER_TYPE);
    assert_eq!(req.phone, "+201000000000");
    assert_eq!(form.phase, SubmitPhase::Submitting);
}

#[test]
fn sign_up_begin_sends_values_as_typed() {
    let mut form = SignUpForm { name: " Mona ".to_owned(), phone: " 0100 ".to_owned(), ..filled_sign_up() };
    let req = form.begin("UA").unwrap();
    assert_eq!(req.name, " Mona ");
    assert_eq!(req.phone, " 0100 ");
}

#[test]
fn sign_up_begin_reports_every_missing_field() {
    let mut form = SignUpForm::default();
    let errors = form.begin("UA").unwrap_err();
    assert_eq!(
        errors.errors(),
        &[
            FieldError::Required(Field::Name),
            FieldError::Required(Field::Email),
            FieldError::Required(Field::Phone),
            FieldError::Required(Field::Password),
        ]
    );
}

#[test]
fn sign_up_finish_rejected_clears_all_inputs() {
    let mut form = filled_sign_up();
    form.begin("UA").unwrap();
    form.finish(&SubmitOutcome::Rejected("The phone has already been taken.".to_owned()));
    assert_eq!(form.name, "");
    assert_eq!(form.email, "");
    assert_eq!(form.phone, "");
    assert_eq!(form.password, "");
    assert_eq!(form.error_message.as_deref(), Some("The phone has already been taken."));
}
