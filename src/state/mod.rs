//! Widget state modules.
//!
//! DESIGN
//! ======
//! `conversation` holds the append-only message log; `widget` layers the
//! transient UI flags on top and owns every state transition, so components
//! only read state and forward events. `send` drives the webhook round-trip
//! against the state signal.

pub mod conversation;
pub mod send;
pub mod widget;
