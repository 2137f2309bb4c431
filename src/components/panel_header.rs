//! Panel header: brand avatar, name, tagline and close control.

use leptos::prelude::*;

use crate::components::icons::{close_icon, message_circle_icon};
use crate::config::WidgetConfig;
use crate::state::widget::WidgetState;

#[component]
pub fn PanelHeader() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let config = expect_context::<WidgetConfig>();

    view! {
        <div class="chat-widget__header">
            <div class="chat-widget__brand">
                <div class="chat-widget__avatar">{message_circle_icon()}</div>
                <div>
                    <h3 class="chat-widget__title">{config.brand_name}</h3>
                    <p class="chat-widget__tagline">{config.tagline}</p>
                </div>
            </div>
            <button
                class="chat-widget__close"
                type="button"
                title="Close chat"
                on:click=move |_| state.update(WidgetState::close_panel)
            >
                {close_icon()}
            </button>
        </div>
    }
}
