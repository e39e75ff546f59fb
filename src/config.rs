//! Widget configuration baked in at build time.
//!
//! Each deployed copy of the widget talks to fixed endpoints and shows fixed
//! copy, so values come from `DOCS_CHAT_*` environment variables captured by
//! `option_env!` when the bundle is compiled. Parsing goes through
//! [`WidgetConfig::from_lookup`] so it can be exercised with any key source.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "/api/chat";
pub const DEFAULT_SUPPORT_URL: &str = "/api/request-support";
pub const DEFAULT_PROJECT_NAME: &str = "Docs";
pub const DEFAULT_ANALYTICS_SOURCE: &str = "docs";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors produced while reading widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric setting could not be parsed.
    #[error("invalid {key}: {value:?} is not a positive integer")]
    InvalidNumber { key: &'static str, value: String },

    /// The tag-manager id contains characters that cannot be embedded safely.
    #[error("invalid DOCS_CHAT_GTAG_ID: {0:?}")]
    InvalidTagId(String),
}

/// Static settings for one deployment of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub api_url: String,
    /// `None` selects the docs-only variant without the support form.
    pub support_url: Option<String>,
    pub support_email: Option<String>,
    pub project_name: String,
    pub placeholder: String,
    pub welcome_message: String,
    /// Constant `source` tag attached to every widget analytics event.
    pub analytics_source: Option<String>,
    pub request_timeout: Duration,
    pub cookie_consent_src: Option<String>,
    pub tag_manager_id: Option<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            support_url: Some(DEFAULT_SUPPORT_URL.to_owned()),
            support_email: None,
            project_name: DEFAULT_PROJECT_NAME.to_owned(),
            placeholder: default_placeholder(DEFAULT_PROJECT_NAME),
            welcome_message: default_welcome(DEFAULT_PROJECT_NAME),
            analytics_source: Some(DEFAULT_ANALYTICS_SOURCE.to_owned()),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            cookie_consent_src: None,
            tag_manager_id: None,
        }
    }
}

impl WidgetConfig {
    /// Build the config from `DOCS_CHAT_*` variables present at compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable is set to an unusable value.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match key {
            "DOCS_CHAT_API_URL" => option_env!("DOCS_CHAT_API_URL"),
            "DOCS_CHAT_SUPPORT_URL" => option_env!("DOCS_CHAT_SUPPORT_URL"),
            "DOCS_CHAT_SUPPORT_EMAIL" => option_env!("DOCS_CHAT_SUPPORT_EMAIL"),
            "DOCS_CHAT_PROJECT_NAME" => option_env!("DOCS_CHAT_PROJECT_NAME"),
            "DOCS_CHAT_PLACEHOLDER" => option_env!("DOCS_CHAT_PLACEHOLDER"),
            "DOCS_CHAT_WELCOME_MESSAGE" => option_env!("DOCS_CHAT_WELCOME_MESSAGE"),
            "DOCS_CHAT_ANALYTICS_SOURCE" => option_env!("DOCS_CHAT_ANALYTICS_SOURCE"),
            "DOCS_CHAT_TIMEOUT_SECS" => option_env!("DOCS_CHAT_TIMEOUT_SECS"),
            "DOCS_CHAT_COOKIE_CONSENT_SRC" => option_env!("DOCS_CHAT_COOKIE_CONSENT_SRC"),
            "DOCS_CHAT_GTAG_ID" => option_env!("DOCS_CHAT_GTAG_ID"),
            _ => None,
        })
    }

    /// Build the config from an arbitrary key lookup.
    ///
    /// Unset keys take their defaults. For `DOCS_CHAT_SUPPORT_URL` and
    /// `DOCS_CHAT_ANALYTICS_SOURCE` an explicitly empty value disables the
    /// feature instead of falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the timeout or tag-manager id is invalid.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).map(str::trim).filter(|v| !v.is_empty());

        let project_name = non_empty("DOCS_CHAT_PROJECT_NAME").unwrap_or(DEFAULT_PROJECT_NAME).to_owned();
        let placeholder = non_empty("DOCS_CHAT_PLACEHOLDER")
            .map_or_else(|| default_placeholder(&project_name), str::to_owned);
        let welcome_message = non_empty("DOCS_CHAT_WELCOME_MESSAGE")
            .map_or_else(|| default_welcome(&project_name), str::to_owned);

        let tag_manager_id = non_empty("DOCS_CHAT_GTAG_ID").map(str::to_owned);
        if let Some(id) = &tag_manager_id {
            if !is_valid_tag_id(id) {
                return Err(ConfigError::InvalidTagId(id.clone()));
            }
        }

        Ok(Self {
            api_url: non_empty("DOCS_CHAT_API_URL").unwrap_or(DEFAULT_API_URL).to_owned(),
            support_url: optional_with_default(lookup("DOCS_CHAT_SUPPORT_URL"), DEFAULT_SUPPORT_URL),
            support_email: non_empty("DOCS_CHAT_SUPPORT_EMAIL").map(str::to_owned),
            project_name,
            placeholder,
            welcome_message,
            analytics_source: optional_with_default(lookup("DOCS_CHAT_ANALYTICS_SOURCE"), DEFAULT_ANALYTICS_SOURCE),
            request_timeout: Duration::from_secs(parse_timeout_secs(lookup("DOCS_CHAT_TIMEOUT_SECS"))?),
            cookie_consent_src: non_empty("DOCS_CHAT_COOKIE_CONSENT_SRC").map(str::to_owned),
            tag_manager_id,
        })
    }

    /// Whether this build carries the support escalation form.
    #[must_use]
    pub fn support_enabled(&self) -> bool {
        self.support_url.is_some()
    }

    /// Header title shown at the top of the chat panel.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} Docs AI", self.project_name)
    }

    /// Alert text shown when a support submission fails.
    #[must_use]
    pub fn support_failure_message(&self) -> String {
        match &self.support_email {
            Some(email) => format!("Failed to send support request. Please try again or email {email} directly."),
            None => "Failed to send support request. Please try again later.".to_owned(),
        }
    }
}

fn default_placeholder(project: &str) -> String {
    format!("Ask about {project} docs...")
}

fn default_welcome(project: &str) -> String {
    format!("Hi! I can help answer questions about {project} documentation. What would you like to know?")
}

/// Unset → default, set-but-empty → disabled, otherwise the trimmed value.
fn optional_with_default(raw: Option<&str>, default: &str) -> Option<String> {
    match raw.map(str::trim) {
        None => Some(default.to_owned()),
        Some("") => None,
        Some(value) => Some(value.to_owned()),
    }
}

fn parse_timeout_secs(raw: Option<&str>) -> Result<u64, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_REQUEST_TIMEOUT_SECS);
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidNumber { key: "DOCS_CHAT_TIMEOUT_SECS", value: raw.to_owned() }),
    }
}

/// Tag ids end up inside an inline `<script>`; only allow id characters.
pub(crate) fn is_valid_tag_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
