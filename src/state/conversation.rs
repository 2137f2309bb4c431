//! Append-only conversation log.
//!
//! DESIGN
//! ======
//! The log exposes no removal or mutation API: messages are pushed in
//! display order and live until the widget is torn down.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use time::OffsetDateTime;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// A single chat bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Rendering key (UUID string).
    pub id: String,
    pub role: Role,
    pub text: String,
    pub sent_at: OffsetDateTime,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>, sent_at: OffsetDateTime) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            sent_at,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Ordered message history, seeded with one bot greeting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    /// Start a log containing only the bot greeting.
    pub fn seeded(greeting: &str, at: OffsetDateTime) -> Self {
        Self {
            messages: vec![Message::new(Role::Bot, greeting, at)],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false for a seeded log.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True while the log holds nothing but the seed greeting.
    pub fn is_only_greeting(&self) -> bool {
        self.messages.len() == 1
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
