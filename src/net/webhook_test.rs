use super::*;
use futures::executor::block_on;
use serde_json::json;
use std::cell::RefCell;
use time::macros::datetime;

const AT: OffsetDateTime = datetime!(2025-03-01 09:05:00 UTC);
const URL: &str = "https://hooks.example.com/chat";
const EMAIL: &str = "info@xoommedia.co.uk";

/// Transport returning a canned outcome and recording what it was sent.
struct FakeTransport {
    outcome: Result<Value, WebhookError>,
    sent: RefCell<Vec<(String, WebhookRequest)>>,
}

impl FakeTransport {
    fn new(outcome: Result<Value, WebhookError>) -> Self {
        Self { outcome, sent: RefCell::new(Vec::new()) }
    }
}

#[async_trait(?Send)]
impl WebhookTransport for FakeTransport {
    async fn post(&self, url: &str, request: &WebhookRequest) -> Result<Value, WebhookError> {
        self.sent.borrow_mut().push((url.to_owned(), request.clone()));
        self.outcome.clone()
    }
}

// =============================================================
// Request body
// =============================================================

#[test]
fn request_serializes_message_and_iso_timestamp_only() {
    let request = WebhookRequest::new("Pricing information", AT);
    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(
        body,
        json!({ "message": "Pricing information", "timestamp": "2025-03-01T09:05:00.000Z" })
    );
}

// =============================================================
// reply_text
// =============================================================

#[test]
fn reply_text_prefers_response_field() {
    assert_eq!(reply_text(&json!({ "response": "Hello", "message": "ignored" })), "Hello");
}

#[test]
fn reply_text_falls_back_to_message_field() {
    assert_eq!(reply_text(&json!({ "message": "From message" })), "From message");
}

#[test]
fn reply_text_skips_empty_response() {
    assert_eq!(reply_text(&json!({ "response": "", "message": "Second" })), "Second");
}

#[test]
fn reply_text_empty_object_uses_try_again() {
    assert_eq!(reply_text(&json!({})), TRY_AGAIN_REPLY);
}

#[test]
fn reply_text_ignores_non_string_fields() {
    assert_eq!(reply_text(&json!({ "response": null, "message": false })), TRY_AGAIN_REPLY);
}

#[test]
fn reply_text_non_object_body_uses_try_again() {
    assert_eq!(reply_text(&json!(["response"])), TRY_AGAIN_REPLY);
    assert_eq!(reply_text(&json!("Hello")), TRY_AGAIN_REPLY);
}

// =============================================================
// Fallback messages
// =============================================================

#[test]
fn unreachable_reply_names_support_email() {
    assert_eq!(
        unreachable_reply(EMAIL),
        "I'm having trouble connecting right now. You can reach us directly at info@xoommedia.co.uk"
    );
}

#[test]
fn webhook_error_display() {
    assert_eq!(WebhookError::Status(502).to_string(), "webhook responded with status 502");
    assert_eq!(
        WebhookError::Request("offline".to_owned()).to_string(),
        "webhook request failed: offline"
    );
}

// =============================================================
// deliver
// =============================================================

#[test]
fn deliver_posts_once_to_configured_url() {
    let transport = FakeTransport::new(Ok(json!({ "response": "Hello" })));
    let reply = block_on(deliver(&transport, URL, EMAIL, "Hi", AT));

    assert_eq!(reply, "Hello");
    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, URL);
    assert_eq!(sent[0].1.message, "Hi");
}

#[test]
fn deliver_empty_object_uses_try_again() {
    let transport = FakeTransport::new(Ok(json!({})));
    let reply = block_on(deliver(&transport, URL, EMAIL, "Hi", AT));
    assert_eq!(reply, TRY_AGAIN_REPLY);
}

#[test]
fn deliver_network_failure_uses_support_email() {
    let transport = FakeTransport::new(Err(WebhookError::Request("failed to fetch".to_owned())));
    let reply = block_on(deliver(&transport, URL, EMAIL, "Hi", AT));
    assert_eq!(reply, unreachable_reply(EMAIL));
}

#[test]
fn deliver_http_status_and_decode_errors_collapse_to_same_reply() {
    for err in [WebhookError::Status(500), WebhookError::Decode("expected value".to_owned())] {
        let transport = FakeTransport::new(Err(err));
        let reply = block_on(deliver(&transport, URL, EMAIL, "Hi", AT));
        assert_eq!(reply, unreachable_reply(EMAIL));
    }
}

#[test]
fn deliver_null_body_uses_support_email() {
    let transport = FakeTransport::new(Ok(Value::Null));
    let reply = block_on(deliver(&transport, URL, "help@example.com", "Hi", AT));
    assert_eq!(reply, unreachable_reply("help@example.com"));
}
