//! Draft input, send button and footer.

use leptos::prelude::*;

use crate::components::chat_widget::dispatch_send;
use crate::components::icons::send_icon;
use crate::config::WidgetConfig;
use crate::state::widget::WidgetState;

#[component]
pub fn InputRow() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let config = expect_context::<WidgetConfig>();
    let footer = config.footer.clone();

    let send_config = config.clone();
    let do_send = move || dispatch_send(state, send_config.clone());
    let on_click = {
        let do_send = do_send.clone();
        move |_| do_send()
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || state.with(WidgetState::can_send);

    view! {
        <div class="chat-widget__input-area">
            <div class="chat-widget__input-row">
                <input
                    class="chat-widget__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || state.with(|s| s.ui.draft.clone())
                    on:input=move |ev| state.update(|s| s.set_draft(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button
                    class="chat-widget__send"
                    type="button"
                    title="Send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    {send_icon()}
                </button>
            </div>
            <p class="chat-widget__footer">{footer}</p>
        </div>
    }
}
