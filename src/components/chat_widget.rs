//! Root widget component and the send dispatcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders either the floating launcher or the open panel. The send
//! dispatcher lives here because both the input row and the quick replies
//! trigger it; it hands the round-trip to `state::send::send_draft`.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::components::input_row::InputRow;
use crate::components::launcher::Launcher;
use crate::components::message_list::MessageList;
use crate::components::panel_header::PanelHeader;
use crate::components::quick_replies::QuickReplies;
use crate::config::WidgetConfig;
use crate::net::http::GlooTransport;
use crate::state::send::send_draft;
use crate::state::widget::WidgetState;
use crate::util::clock;

const WIDGET_CSS: &str = include_str!("../../style/chat-widget.css");

/// The embeddable chat widget.
#[component]
pub fn ChatWidget(config: WidgetConfig) -> impl IntoView {
    let state = RwSignal::new(WidgetState::new(&config.greeting, clock::now()));
    provide_context(state);
    provide_context(config);

    let panel_open = move || state.with(|s| s.ui.panel_open);
    let show_quick_replies = move || state.with(WidgetState::show_quick_replies);

    view! {
        <style>{WIDGET_CSS}</style>
        <div class="chat-widget">
            <Show when=panel_open fallback=|| view! { <Launcher/> }>
                <div class="chat-widget__panel">
                    <PanelHeader/>
                    <MessageList/>
                    <Show when=show_quick_replies>
                        <QuickReplies/>
                    </Show>
                    <InputRow/>
                </div>
            </Show>
        </div>
    }
}

/// Send the current draft and append the webhook's reply when it arrives.
///
/// No-op if the draft is blank or a reply is already pending. In the browser
/// the round-trip runs as a local task; elsewhere it resolves immediately.
pub(crate) fn dispatch_send(state: RwSignal<WidgetState>, config: WidgetConfig) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        send_draft(state, &GlooTransport, &config).await;
    });

    #[cfg(not(feature = "csr"))]
    futures::executor::block_on(send_draft(state, &GlooTransport, &config));
}
