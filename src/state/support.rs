//! Support escalation draft and its validation.

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

/// Subject used when the user leaves the subject field blank.
pub const DEFAULT_SUPPORT_SUBJECT: &str = "Support request from docs chat";

/// Alert shown when a required field is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Please provide your email and message.";

/// Form field contents as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupportRequestDraft {
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A draft that passed validation: trimmed, with the subject defaulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidSupportRequest {
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Why a draft cannot be submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SupportValidationError {
    #[error("email is required")]
    MissingEmail,
    #[error("message is required")]
    MissingMessage,
}

impl SupportRequestDraft {
    /// Trim all fields and check the required ones.
    ///
    /// # Errors
    ///
    /// Returns the first missing required field (email before message).
    pub fn validate(&self) -> Result<ValidSupportRequest, SupportValidationError> {
        let email = self.email.trim();
        let message = self.message.trim();
        if email.is_empty() {
            return Err(SupportValidationError::MissingEmail);
        }
        if message.is_empty() {
            return Err(SupportValidationError::MissingMessage);
        }

        let subject = match self.subject.trim() {
            "" => DEFAULT_SUPPORT_SUBJECT,
            s => s,
        };

        Ok(ValidSupportRequest { email: email.to_owned(), subject: subject.to_owned(), message: message.to_owned() })
    }

    pub fn clear(&mut self) {
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.subject.is_empty() && self.message.is_empty()
    }
}
