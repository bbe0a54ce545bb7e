//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so they can be tested without a DOM.

pub mod clock;
pub mod glow;
pub mod key_listener;
pub mod keys;
