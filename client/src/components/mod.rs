//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` owns the conversation; `chat_bubble` and `typing_indicator`
//! are stateless leaves it renders.

pub mod chat_bubble;
pub mod chat_widget;
pub mod typing_indicator;
