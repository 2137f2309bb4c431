//! Scrolling list of chat bubbles with a typing indicator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list stays pinned to the newest entry: any change to the log or to
//! the pending-reply flag scrolls it to the bottom.

use leptos::prelude::*;

use crate::state::conversation::Message;
use crate::state::widget::WidgetState;
use crate::util::clock;

#[component]
pub fn MessageList() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = state.with(|s| (s.log.len(), s.ui.waiting_for_reply));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-widget__messages" node_ref=messages_ref>
            <For
                each=move || state.with(|s| s.log.messages().to_vec())
                key=|msg: &Message| msg.id.clone()
                children=move |msg: Message| render_bubble(&msg)
            />

            {move || state.with(WidgetState::show_typing_indicator).then(render_typing_indicator)}
        </div>
    }
}

fn render_bubble(msg: &Message) -> impl IntoView + use<> {
    let is_user = msg.is_user();
    let is_bot = !is_user;
    let text = msg.text.clone();
    let time_label = clock::local_clock_label(msg.sent_at);

    view! {
        <div class="chat-widget__row" class:chat-widget__row--user=is_user class:chat-widget__row--bot=is_bot>
            <div
                class="chat-widget__bubble"
                class:chat-widget__bubble--user=is_user
                class:chat-widget__bubble--bot=is_bot
            >
                <p class="chat-widget__text">{text}</p>
                <span class="chat-widget__time">{time_label}</span>
            </div>
        </div>
    }
}

fn render_typing_indicator() -> impl IntoView {
    view! {
        <div class="chat-widget__row chat-widget__row--bot">
            <div class="chat-widget__bubble chat-widget__bubble--bot chat-widget__typing">
                <span class="chat-widget__dot"></span>
                <span class="chat-widget__dot"></span>
                <span class="chat-widget__dot"></span>
            </div>
        </div>
    }
}
