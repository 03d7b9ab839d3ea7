use super::*;

#[test]
fn parse_reply_body_returns_reply_text() {
    assert_eq!(parse_reply_body(r#"{"reply":"hi"}"#), Ok("hi".to_owned()));
}

#[test]
fn parse_reply_body_rejects_non_json() {
    let err = parse_reply_body("not json").unwrap_err();
    assert!(matches!(err, ExchangeError::InvalidBody(_)));
    assert_eq!(err.fallback_text(), INVALID_RESPONSE_TEXT);
}

#[test]
fn parse_reply_body_missing_reply_is_semantic_failure() {
    assert_eq!(parse_reply_body("{}"), Err(ExchangeError::MissingReply));
}

#[test]
fn parse_reply_body_treats_empty_or_non_string_reply_as_missing() {
    assert_eq!(parse_reply_body(r#"{"reply":""}"#), Err(ExchangeError::MissingReply));
    assert_eq!(parse_reply_body(r#"{"reply":42}"#), Err(ExchangeError::MissingReply));
    assert_eq!(parse_reply_body(r#"{"reply":null}"#), Err(ExchangeError::MissingReply));
    assert_eq!(parse_reply_body("[]"), Err(ExchangeError::MissingReply));
}

#[test]
fn reply_text_maps_each_failure_to_its_fallback() {
    assert_eq!(reply_text(Ok("ok".into())), "ok");
    assert_eq!(reply_text(Err(ExchangeError::Transport("offline".into()))), NETWORK_ERROR_TEXT);
    assert_eq!(reply_text(Err(ExchangeError::InvalidBody("eof".into()))), INVALID_RESPONSE_TEXT);
    assert_eq!(reply_text(Err(ExchangeError::MissingReply)), NO_REPLY_TEXT);
}

#[test]
fn fallback_texts_are_distinct() {
    assert_ne!(NETWORK_ERROR_TEXT, INVALID_RESPONSE_TEXT);
    assert_ne!(INVALID_RESPONSE_TEXT, NO_REPLY_TEXT);
    assert_ne!(NETWORK_ERROR_TEXT, NO_REPLY_TEXT);
}

#[test]
fn chat_request_omits_absent_client() {
    let req = ChatRequest::new("hello", None);
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "hello" }));
}

#[test]
fn chat_request_drops_blank_client() {
    assert_eq!(ChatRequest::new("hello", Some("  ")).client, None);
}

#[test]
fn chat_request_includes_configured_client() {
    let req = ChatRequest::new("hello", Some("acme"));
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "message": "hello", "client": "acme" }));
}

#[test]
fn chat_request_defaults_missing_message_to_empty() {
    let req: ChatRequest = serde_json::from_str(r#"{"client":"acme"}"#).unwrap();
    assert_eq!(req.message, "");
    assert_eq!(req.client.as_deref(), Some("acme"));
}

#[test]
fn sender_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Sender::User).unwrap(), "user");
    assert_eq!(Sender::Bot.as_str(), "bot");
}
