//! Chat session state machine.
//!
//! DESIGN
//! ======
//! `ChatSession` is the single owner of widget state for one mounted widget:
//! visibility flags, transcript, conversation history, input text and the
//! support draft. Every user action is a method that mutates that state and
//! returns the [`Effect`]s the UI runtime must apply. Network calls are
//! split into a start transition (emitting `SendChat`/`SubmitSupport`) and a
//! completion transition fed with the call's result, so the whole flow is
//! testable without a browser.
//!
//! States: `Closed → Open → (Idle | AwaitingResponse)`, with the support
//! form an exclusive sub-mode of `Open`. At most one chat request is in
//! flight; support submission is gated separately by `support_pending`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::conversation::{ConversationHistory, Role};
use super::effect::{Effect, FocusTarget};
use super::support::{MISSING_FIELDS_MESSAGE, SupportRequestDraft};
use crate::config::WidgetConfig;
use crate::net::api::ApiError;
use crate::net::types::{ChatRequest, ChatResponse, SupportRequest, SupportResponse};
use crate::util::analytics::AnalyticsEvent;

/// Assistant reply shown when a chat request fails for any reason.
pub const APOLOGY_MESSAGE: &str = "Sorry, I encountered an error. Please try again later.";

pub const SUBMIT_LABEL: &str = "Send to Support";
pub const SUBMIT_PENDING_LABEL: &str = "Sending...";

/// Visibility and loading flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WidgetState {
    pub is_open: bool,
    /// True from `send` until the matching `complete_send`.
    pub is_loading: bool,
    pub is_support_form_open: bool,
}

/// One rendered message in the chat panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Rendered with the error style.
    pub is_error: bool,
}

impl TranscriptMessage {
    fn new(role: Role, content: impl Into<String>, is_error: bool) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content: content.into(), is_error }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct InFlight {
    id: u64,
    question: String,
}

#[derive(Clone, Debug)]
pub struct ChatSession {
    state: WidgetState,
    history: ConversationHistory,
    transcript: Vec<TranscriptMessage>,
    input: String,
    draft: SupportRequestDraft,
    support_pending: bool,
    support_enabled: bool,
    welcome_message: String,
    page: String,
    next_request_id: u64,
    in_flight: Option<InFlight>,
}

impl ChatSession {
    pub fn new(welcome_message: impl Into<String>, page: impl Into<String>, support_enabled: bool) -> Self {
        Self {
            state: WidgetState::default(),
            history: ConversationHistory::default(),
            transcript: Vec::new(),
            input: String::new(),
            draft: SupportRequestDraft::default(),
            support_pending: false,
            support_enabled,
            welcome_message: welcome_message.into(),
            page: page.into(),
            next_request_id: 1,
            in_flight: None,
        }
    }

    pub fn from_config(config: &WidgetConfig, page: impl Into<String>) -> Self {
        Self::new(config.welcome_message.clone(), page, config.support_enabled())
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> WidgetState {
        self.state
    }

    #[must_use]
    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    #[must_use]
    pub fn transcript(&self) -> &[TranscriptMessage] {
        &self.transcript
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn draft(&self) -> &SupportRequestDraft {
        &self.draft
    }

    #[must_use]
    pub fn support_enabled(&self) -> bool {
        self.support_enabled
    }

    #[must_use]
    pub fn support_pending(&self) -> bool {
        self.support_pending
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.support_pending { SUBMIT_PENDING_LABEL } else { SUBMIT_LABEL }
    }

    /// Whether the send button should be enabled.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.state.is_loading && !self.input.trim().is_empty()
    }

    // =========================================================================
    // CHAT
    // =========================================================================

    /// Open or close the panel.
    pub fn toggle(&mut self) -> Vec<Effect> {
        if self.state.is_open {
            // The form must never outlive the panel.
            self.state.is_support_form_open = false;
            self.state.is_open = false;
            return Vec::new();
        }

        self.state.is_open = true;
        if self.transcript.is_empty() {
            let welcome = TranscriptMessage::new(Role::Assistant, self.welcome_message.clone(), false);
            self.transcript.push(welcome);
        }
        vec![Effect::Focus(FocusTarget::ChatInput), Effect::Track(AnalyticsEvent::chat_opened())]
    }

    /// Close the panel if it is open.
    pub fn close(&mut self) -> Vec<Effect> {
        if self.state.is_open { self.toggle() } else { Vec::new() }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Send the current input as a question.
    ///
    /// No-op when the trimmed input is empty or a request is already in
    /// flight.
    pub fn send(&mut self) -> Vec<Effect> {
        let question = self.input.trim().to_owned();
        if question.is_empty() || self.state.is_loading {
            return Vec::new();
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;

        self.transcript.push(TranscriptMessage::new(Role::User, question.clone(), false));
        self.input.clear();
        self.state.is_loading = true;
        self.in_flight = Some(InFlight { id: request_id, question: question.clone() });

        log::debug!("chat request {request_id} started");

        let request =
            ChatRequest { question: question.clone(), conversation_history: self.history.snapshot(), page: self.page.clone() };
        vec![
            Effect::ScrollToBottom,
            Effect::Track(AnalyticsEvent::chat_question(&question)),
            Effect::SendChat { request_id, request },
        ]
    }

    /// Settle the in-flight chat request.
    ///
    /// Results for any other request id are ignored.
    pub fn complete_send(&mut self, request_id: u64, result: Result<ChatResponse, ApiError>) -> Vec<Effect> {
        let Some(in_flight) = self.in_flight.take_if(|f| f.id == request_id) else {
            log::debug!("ignoring stale chat response {request_id}");
            return Vec::new();
        };

        let mut effects = Vec::new();
        match result {
            Ok(response) => {
                effects.push(Effect::Track(AnalyticsEvent::chat_response(&response.answer)));
                self.transcript.push(TranscriptMessage::new(Role::Assistant, response.answer.clone(), false));
                self.history.push_exchange(in_flight.question, response.answer);
            }
            Err(e) => {
                log::error!("chat request {request_id} failed: {e}");
                self.transcript.push(TranscriptMessage::new(Role::Assistant, APOLOGY_MESSAGE, true));
                effects.push(Effect::Track(AnalyticsEvent::chat_error(&e.to_string())));
            }
        }

        self.state.is_loading = false;
        effects.push(Effect::ScrollToBottom);
        effects.push(Effect::Focus(FocusTarget::ChatInput));
        effects
    }

    // =========================================================================
    // SUPPORT
    // =========================================================================

    pub fn open_support_form(&mut self) -> Vec<Effect> {
        if !self.support_enabled || !self.state.is_open {
            return Vec::new();
        }
        self.state.is_support_form_open = true;
        vec![Effect::Focus(FocusTarget::SupportEmail)]
    }

    pub fn close_support_form(&mut self) -> Vec<Effect> {
        if !self.state.is_support_form_open {
            return Vec::new();
        }
        self.state.is_support_form_open = false;
        vec![Effect::Focus(FocusTarget::ChatInput)]
    }

    pub fn set_support_email(&mut self, text: impl Into<String>) {
        self.draft.email = text.into();
    }

    pub fn set_support_subject(&mut self, text: impl Into<String>) {
        self.draft.subject = text.into();
    }

    pub fn set_support_message(&mut self, text: impl Into<String>) {
        self.draft.message = text.into();
    }

    /// Validate the draft and start the support request.
    pub fn submit_support(&mut self) -> Vec<Effect> {
        if !self.support_enabled || self.support_pending {
            return Vec::new();
        }

        let valid = match self.draft.validate() {
            Ok(valid) => valid,
            Err(e) => {
                log::debug!("support submission rejected: {e}");
                return vec![Effect::Alert(MISSING_FIELDS_MESSAGE.to_owned())];
            }
        };

        self.support_pending = true;
        vec![Effect::SubmitSupport(SupportRequest {
            email: valid.email,
            subject: valid.subject,
            message: valid.message,
            conversation_history: self.history.snapshot(),
            page: self.page.clone(),
        })]
    }

    /// Settle the support request. `failure_message` is the alert shown when
    /// it failed.
    pub fn complete_support(&mut self, result: Result<SupportResponse, ApiError>, failure_message: &str) -> Vec<Effect> {
        if !self.support_pending {
            return Vec::new();
        }
        self.support_pending = false;

        match result {
            Ok(response) => {
                self.state.is_support_form_open = false;
                self.transcript.push(TranscriptMessage::new(Role::Assistant, response.message, false));
                self.draft.clear();
                vec![
                    Effect::Track(AnalyticsEvent::support_sent()),
                    Effect::ScrollToBottom,
                    Effect::Focus(FocusTarget::ChatInput),
                ]
            }
            Err(e) => {
                log::error!("support request failed: {e}");
                vec![Effect::Alert(failure_message.to_owned()), Effect::Track(AnalyticsEvent::support_error(&e.to_string()))]
            }
        }
    }

    /// Drop transient state when the widget is unmounted.
    pub fn teardown(&mut self) {
        self.state = WidgetState::default();
        self.input.clear();
        self.draft.clear();
        self.support_pending = false;
        self.in_flight = None;
    }
}
