//! The send/reply pipeline run against the widget's state signal.
//!
//! DESIGN
//! ======
//! One async function covers the whole round-trip so every caller (input
//! row, quick replies) gets the same guarantee: once a send has begun, a bot
//! message is appended and the pending flag cleared, whatever the webhook
//! does.

#[cfg(test)]
#[path = "send_test.rs"]
mod send_test;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::webhook::{WebhookTransport, deliver};
use crate::state::widget::WidgetState;
use crate::util::clock;

/// Send the current draft through `transport` and append the reply.
///
/// Returns `false` without touching state when the draft is blank or a
/// reply is already pending.
pub async fn send_draft<T>(state: RwSignal<WidgetState>, transport: &T, config: &WidgetConfig) -> bool
where
    T: WebhookTransport + ?Sized,
{
    let Some(text) = state.try_update(|s| s.begin_send(clock::now())).flatten() else {
        return false;
    };

    let reply = deliver(transport, &config.webhook_url, &config.support_email, &text, clock::now()).await;
    state.update(|s| s.finish_send(reply, clock::now()));
    true
}
