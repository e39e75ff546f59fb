//! Conversation history sent along with every question.
//!
//! DESIGN
//! ======
//! The backend is stateless, so each request carries the recent turns. The
//! store is bounded to the last [`HISTORY_CAP`] turns; older turns are
//! evicted first so requests stay small.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of turns retained (five question/answer exchanges).
pub const HISTORY_CAP: usize = 10;

/// Author of a conversation turn or transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One turn of conversation. Fields are private so a turn cannot change
/// after it is recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    role: Role,
    content: String,
}

impl ConversationTurn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered, bounded conversation history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationHistory {
    turns: VecDeque<ConversationTurn>,
}

impl ConversationHistory {
    /// Record a completed question/answer exchange, then evict the oldest
    /// turns beyond [`HISTORY_CAP`].
    pub fn push_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.turns.push_back(ConversationTurn::new(Role::User, question));
        self.turns.push_back(ConversationTurn::new(Role::Assistant, answer));
        while self.turns.len() > HISTORY_CAP {
            self.turns.pop_front();
        }
    }

    /// Copy of the current turns, oldest first, for an outgoing request.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ConversationTurn> {
        self.turns.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}
