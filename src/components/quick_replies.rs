//! Canned prompts offered before the first user message.

use leptos::prelude::*;

use crate::components::chat_widget::dispatch_send;
use crate::config::WidgetConfig;
use crate::state::widget::WidgetState;

/// Delay between filling the draft and sending it.
#[cfg(feature = "csr")]
const QUICK_REPLY_SEND_DELAY_MS: u32 = 100;

#[component]
pub fn QuickReplies() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let config = expect_context::<WidgetConfig>();

    let on_pick = move |reply: String, config: WidgetConfig| {
        state.update(|s| s.apply_quick_reply(&reply));

        #[cfg(feature = "csr")]
        gloo_timers::callback::Timeout::new(QUICK_REPLY_SEND_DELAY_MS, move || dispatch_send(state, config)).forget();

        #[cfg(not(feature = "csr"))]
        dispatch_send(state, config);
    };

    let buttons = config
        .quick_replies
        .iter()
        .map(|reply| {
            let reply = reply.clone();
            let label = reply.clone();
            let config = config.clone();
            view! {
                <button
                    class="chat-widget__quick-reply"
                    type="button"
                    on:click=move |_| on_pick(reply.clone(), config.clone())
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="chat-widget__quick-replies">
            <p class="chat-widget__quick-replies-label">"Quick replies:"</p>
            <div class="chat-widget__quick-replies-list">{buttons}</div>
        </div>
    }
}
