//! Networking for the webhook round-trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `webhook` defines the wire schema, the transport seam and the reply
//! pipeline; `http` is the browser `fetch` transport.

pub mod http;
pub mod webhook;
