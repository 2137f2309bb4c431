//! Webhook wire types and the reply pipeline.
//!
//! ERROR HANDLING
//! ==============
//! Transports report failures as [`WebhookError`], but [`deliver`] never
//! returns one: every failure (network, HTTP status, undecodable body)
//! collapses into the same support-email reply so the widget always has a
//! bot message to append.

#[cfg(test)]
#[path = "webhook_test.rs"]
mod webhook_test;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;

use crate::util::clock;

/// Reply used when the webhook answered but carried no usable text.
pub const TRY_AGAIN_REPLY: &str = "I'm having trouble connecting right now. Please try again!";

/// JSON body posted to the webhook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WebhookRequest {
    pub message: String,
    /// ISO-8601 UTC send time.
    pub timestamp: String,
}

impl WebhookRequest {
    pub fn new(message: &str, at: OffsetDateTime) -> Self {
        Self {
            message: message.to_owned(),
            timestamp: clock::iso_timestamp(at),
        }
    }
}

/// Failure of a single webhook call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebhookError {
    /// The request could not be built or sent.
    #[error("webhook request failed: {0}")]
    Request(String),

    /// The webhook answered with a non-success HTTP status.
    #[error("webhook responded with status {0}")]
    Status(u16),

    /// The response body was not JSON, or was JSON `null`.
    #[error("webhook response decode failed: {0}")]
    Decode(String),
}

/// Sends a [`WebhookRequest`] and returns the decoded JSON response.
///
/// Browser futures are `!Send`, so the trait is declared `?Send`.
#[async_trait(?Send)]
pub trait WebhookTransport {
    /// POST `request` as JSON to `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`WebhookError`] on network failure, non-2xx status, or a
    /// body that is not valid JSON.
    async fn post(&self, url: &str, request: &WebhookRequest) -> Result<Value, WebhookError>;
}

/// Reply shown when the webhook cannot be reached at all.
pub fn unreachable_reply(support_email: &str) -> String {
    format!("I'm having trouble connecting right now. You can reach us directly at {support_email}")
}

/// Pick the reply text out of a webhook response body.
///
/// Prefers a non-empty `response` string, then a non-empty `message`
/// string, then [`TRY_AGAIN_REPLY`]. Non-object bodies have neither field.
pub fn reply_text(body: &Value) -> String {
    ["response", "message"]
        .iter()
        .find_map(|field| {
            body.get(field)
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
        })
        .unwrap_or(TRY_AGAIN_REPLY)
        .to_owned()
}

/// Send `text` to the webhook and produce the bot reply.
///
/// Infallible by construction: errors are logged and replaced by
/// [`unreachable_reply`].
pub async fn deliver<T>(transport: &T, url: &str, support_email: &str, text: &str, at: OffsetDateTime) -> String
where
    T: WebhookTransport + ?Sized,
{
    let request = WebhookRequest::new(text, at);
    let outcome = match transport.post(url, &request).await {
        Ok(Value::Null) => Err(WebhookError::Decode("null body".to_owned())),
        other => other,
    };

    match outcome {
        Ok(body) => reply_text(&body),
        Err(e) => {
            leptos::logging::warn!("webhook call failed: {e}");
            unreachable_reply(support_email)
        }
    }
}
