use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn encode_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

#[test]
fn decode_round_trips_a_known_payload() {
    let original = Identity {
        username: "alice".to_owned(),
        sub: "u-1".to_owned(),
        exp: 1_700_000_600,
        iat: 1_700_000_000,
        scope: None,
    };
    let payload = serde_json::to_value(&original).expect("serialize claims");
    let decoded = decode_identity(&encode_token(&payload)).expect("decode");
    assert_eq!(decoded, original);
}

#[test]
fn decode_reads_server_issued_claims_and_ignores_extras() {
    let token = encode_token(&serde_json::json!({
        "iss": "jwt-host",
        "jti": "3f6b1c2e",
        "sub": "42",
        "iat": 100,
        "exp": 700,
        "username": "bob"
    }));
    let decoded = decode_identity(&token).expect("decode");
    assert_eq!(decoded.username, "bob");
    assert_eq!(decoded.sub, "42");
    assert_eq!(decoded.exp, 700);
    assert_eq!(decoded.iat, 100);
}

#[test]
fn decode_defaults_missing_claims() {
    let token = encode_token(&serde_json::json!({ "username": "carol" }));
    let decoded = decode_identity(&token).expect("decode");
    assert_eq!(decoded.username, "carol");
    assert_eq!(decoded.exp, 0);
    assert_eq!(decoded.scope, None);
}

#[test]
fn decode_handles_the_url_safe_alphabet() {
    // ">>>>" encodes to "Pj4-Pg" in base64url, exercising the '-' substitution.
    let token = encode_token(&serde_json::json!({ "username": ">>>>" }));
    let decoded = decode_identity(&token).expect("decode");
    assert_eq!(decoded.username, ">>>>");
}

#[test]
fn decode_rejects_a_token_without_a_payload_segment() {
    assert!(matches!(
        decode_identity("no-dots-here"),
        Err(SessionError::Decode(_))
    ));
}

#[test]
fn decode_rejects_invalid_base64() {
    assert!(matches!(
        decode_identity("header.!!!!.signature"),
        Err(SessionError::Decode(_))
    ));
}

#[test]
fn decode_rejects_a_non_json_payload() {
    let payload = URL_SAFE_NO_PAD.encode("plain text");
    let token = format!("header.{payload}.signature");
    assert!(matches!(
        decode_identity(&token),
        Err(SessionError::Decode(_))
    ));
}
