//! Leptos components that make up the chat widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatWidget` owns the state signal and provides it (with the config) as
//! context; every other component reads from context and forwards user
//! events to `WidgetState` transitions.

pub mod chat_widget;
pub mod icons;
pub mod input_row;
pub mod launcher;
pub mod message_list;
pub mod panel_header;
pub mod quick_replies;
