//! Widget UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` owns the session signal and applies its effects; the other
//! components only render session state and forward user input.

pub mod chat_widget;
pub mod message;
pub mod support_form;
