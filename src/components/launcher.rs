//! Floating launcher button shown while the panel is closed.

use leptos::prelude::*;

use crate::components::icons::message_circle_icon;
use crate::state::widget::WidgetState;

/// Round button that opens the panel. The "1" badge is decorative.
#[component]
pub fn Launcher() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();

    view! {
        <button
            class="chat-widget__launcher"
            type="button"
            title="Open chat"
            on:click=move |_| state.update(WidgetState::open_panel)
        >
            {message_circle_icon()}
            <span class="chat-widget__badge">"1"</span>
        </button>
    }
}
