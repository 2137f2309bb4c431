//! Browser `fetch` transport for the webhook, via `gloo-net`.
//!
//! Off the browser (native builds, tests) the transport has no `fetch` to
//! call and reports every post as a request failure.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use serde_json::Value;

use super::webhook::{WebhookError, WebhookRequest, WebhookTransport};

/// Posts webhook requests with the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl WebhookTransport for GlooTransport {
    async fn post(&self, url: &str, request: &WebhookRequest) -> Result<Value, WebhookError> {
        #[cfg(feature = "csr")]
        {
            // `.json()` also sets `Content-Type: application/json`.
            let resp = gloo_net::http::Request::post(url)
                .json(request)
                .map_err(|e| WebhookError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| WebhookError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(WebhookError::Status(resp.status()));
            }
            resp.json::<Value>().await.map_err(|e| WebhookError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, request);
            Err(WebhookError::Request("fetch not available outside the browser".to_owned()))
        }
    }
}
