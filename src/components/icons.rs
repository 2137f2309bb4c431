//! Inline SVG icons (stroke-only, `currentColor`).

use leptos::prelude::*;

pub fn message_circle_icon() -> impl IntoView {
    view! {
        <svg class="chat-widget__icon" viewBox="0 0 24 24" aria-hidden="true">
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
        </svg>
    }
}

pub fn close_icon() -> impl IntoView {
    view! {
        <svg class="chat-widget__icon" viewBox="0 0 24 24" aria-hidden="true">
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        </svg>
    }
}

pub fn send_icon() -> impl IntoView {
    view! {
        <svg class="chat-widget__icon" viewBox="0 0 24 24" aria-hidden="true">
            <line x1="22" y1="2" x2="11" y2="13" />
            <polygon points="22 2 15 22 11 13 2 9 22 2" />
        </svg>
    }
}
