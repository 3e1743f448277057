use super::*;
use crate::net::types::AccessToken;

fn session(user: serde_json::Value) -> Session {
    Session { token: "1|abc".to_owned(), user }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_signed_out() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.is_authorized());
}

#[test]
fn sign_in_then_sign_out_round_trips() {
    let mut state = AuthState::default();
    state.sign_in(session(serde_json::json!({ "id": 1 })));
    assert!(state.is_authorized());
    state.sign_out();
    assert!(!state.is_authorized());
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_from_payload_takes_plain_text_token() {
    let payload = AuthPayload {
        access_token: AccessToken { plain_text_token: "9|xyz".to_owned() },
        user: serde_json::json!({ "id": 9 }),
    };
    let s = Session::from(payload);
    assert_eq!(s.token, "9|xyz");
    assert_eq!(s.user, serde_json::json!({ "id": 9 }));
}

#[test]
fn display_name_prefers_name_then_email() {
    assert_eq!(
        session(serde_json::json!({ "name": "Sam", "email": "s@x.io" })).display_name().as_deref(),
        Some("Sam")
    );
    assert_eq!(session(serde_json::json!({ "email": "s@x.io" })).display_name().as_deref(), Some("s@x.io"));
    assert_eq!(session(serde_json::json!({ "name": "  " })).display_name(), None);
    assert_eq!(session(serde_json::json!("opaque")).display_name(), None);
}
