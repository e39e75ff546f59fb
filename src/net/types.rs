//! Wire types for the chat and support endpoints.
//!
//! Both endpoints take the recent conversation and the page path so answers
//! and tickets carry the user's context. Unknown response fields (for
//! example `sources` on chat answers) are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::conversation::ConversationTurn;

/// Body of `POST <api_url>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub question: String,
    pub conversation_history: Vec<ConversationTurn>,
    pub page: String,
}

/// Successful chat answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// Body of `POST <support_url>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SupportRequest {
    pub email: String,
    pub subject: String,
    pub message: String,
    pub conversation_history: Vec<ConversationTurn>,
    pub page: String,
}

/// Confirmation returned by the support endpoint, shown to the user verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SupportResponse {
    pub message: String,
}
