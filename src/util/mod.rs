//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic so state transitions stay testable off the browser.

pub mod clock;
