//! Widget UI state and the transitions driven by user events.
//!
//! DESIGN
//! ======
//! `WidgetState` is the single value held in the component's signal. The
//! send pipeline is split into `begin_send` (synchronous, before the
//! webhook call) and `finish_send` (after it resolves) so the network step
//! can run in a spawned task while both halves stay plain functions.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use time::OffsetDateTime;

use super::conversation::{ConversationLog, Message, Role};

/// Transient presentation flags. Reset on reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub panel_open: bool,
    pub draft: String,
    pub waiting_for_reply: bool,
}

/// Conversation plus UI flags for one widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetState {
    pub log: ConversationLog,
    pub ui: UiState,
}

impl WidgetState {
    pub fn new(greeting: &str, at: OffsetDateTime) -> Self {
        Self {
            log: ConversationLog::seeded(greeting, at),
            ui: UiState::default(),
        }
    }

    pub fn open_panel(&mut self) {
        self.ui.panel_open = true;
    }

    /// Hide the panel. The conversation is kept.
    pub fn close_panel(&mut self) {
        self.ui.panel_open = false;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.ui.draft = text.into();
    }

    /// Whether the send control is enabled.
    pub fn can_send(&self) -> bool {
        !self.ui.waiting_for_reply && !self.ui.draft.trim().is_empty()
    }

    /// Quick replies are offered only before the first user message.
    pub fn show_quick_replies(&self) -> bool {
        self.log.is_only_greeting()
    }

    pub fn show_typing_indicator(&self) -> bool {
        self.ui.waiting_for_reply
    }

    /// Put a quick reply into the draft; the caller follows up with
    /// [`Self::begin_send`].
    pub fn apply_quick_reply(&mut self, reply: &str) {
        self.ui.draft = reply.to_owned();
    }

    /// Start a send from the current draft.
    ///
    /// Appends the user message, clears the draft and marks a reply as
    /// pending. Returns the text to deliver, or `None` when the draft is
    /// blank or a reply is already pending (state untouched).
    pub fn begin_send(&mut self, at: OffsetDateTime) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = self.ui.draft.trim().to_owned();
        self.log.push(Message::new(Role::User, text.clone(), at));
        self.ui.draft.clear();
        self.ui.waiting_for_reply = true;
        Some(text)
    }

    /// Complete a send: append the bot reply and clear the pending flag.
    pub fn finish_send(&mut self, reply: String, at: OffsetDateTime) {
        self.log.push(Message::new(Role::Bot, reply, at));
        self.ui.waiting_for_reply = false;
    }
}
