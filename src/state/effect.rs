//! Side effects requested by session transitions.
//!
//! Transitions in [`super::session`] only mutate plain state; anything that
//! touches the browser or the network is returned as an [`Effect`] for the
//! widget component to carry out, in order.

use crate::net::types::{ChatRequest, SupportRequest};
use crate::util::analytics::AnalyticsEvent;

/// Input element that should receive focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusTarget {
    ChatInput,
    SupportEmail,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Focus(FocusTarget),
    /// Scroll the transcript to its newest message.
    ScrollToBottom,
    /// Blocking dialog with the given text.
    Alert(String),
    Track(AnalyticsEvent),
    /// Start the chat request; its outcome goes back through
    /// `ChatSession::complete_send` with the same `request_id`.
    SendChat { request_id: u64, request: ChatRequest },
    /// Start the support request; its outcome goes back through
    /// `ChatSession::complete_support`.
    SubmitSupport(SupportRequest),
}
