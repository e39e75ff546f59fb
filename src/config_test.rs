use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<&'static str> {
    let map: HashMap<&'static str, &'static str> = pairs.iter().copied().collect();
    move |key: &str| map.get(key).copied()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn from_lookup_with_no_keys_matches_default() {
    let cfg = WidgetConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, WidgetConfig::default());
}

#[test]
fn default_config_enables_support_and_docs_source() {
    let cfg = WidgetConfig::default();
    assert!(cfg.support_enabled());
    assert_eq!(cfg.support_url.as_deref(), Some(DEFAULT_SUPPORT_URL));
    assert_eq!(cfg.analytics_source.as_deref(), Some("docs"));
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.api_url, "/api/chat");
}

#[test]
fn placeholder_and_welcome_follow_project_name() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[("DOCS_CHAT_PROJECT_NAME", "Acme")])).unwrap();
    assert_eq!(cfg.project_name, "Acme");
    assert_eq!(cfg.placeholder, "Ask about Acme docs...");
    assert_eq!(
        cfg.welcome_message,
        "Hi! I can help answer questions about Acme documentation. What would you like to know?"
    );
    assert_eq!(cfg.title(), "Acme Docs AI");
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn explicit_values_override_defaults() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[
        ("DOCS_CHAT_API_URL", "https://chat.example.test/api/chat"),
        ("DOCS_CHAT_SUPPORT_URL", "https://chat.example.test/api/request-support"),
        ("DOCS_CHAT_PLACEHOLDER", "Type here"),
        ("DOCS_CHAT_WELCOME_MESSAGE", "Hello"),
        ("DOCS_CHAT_TIMEOUT_SECS", "5"),
        ("DOCS_CHAT_GTAG_ID", "G-TEST123"),
        ("DOCS_CHAT_COOKIE_CONSENT_SRC", "https://consent.example.test/script.js"),
    ]))
    .unwrap();

    assert_eq!(cfg.api_url, "https://chat.example.test/api/chat");
    assert_eq!(cfg.support_url.as_deref(), Some("https://chat.example.test/api/request-support"));
    assert_eq!(cfg.placeholder, "Type here");
    assert_eq!(cfg.welcome_message, "Hello");
    assert_eq!(cfg.request_timeout, Duration::from_secs(5));
    assert_eq!(cfg.tag_manager_id.as_deref(), Some("G-TEST123"));
    assert_eq!(cfg.cookie_consent_src.as_deref(), Some("https://consent.example.test/script.js"));
}

#[test]
fn empty_support_url_selects_docs_variant() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[("DOCS_CHAT_SUPPORT_URL", "")])).unwrap();
    assert!(!cfg.support_enabled());
    assert_eq!(cfg.support_url, None);
}

#[test]
fn empty_analytics_source_disables_tag() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[("DOCS_CHAT_ANALYTICS_SOURCE", "  ")])).unwrap();
    assert_eq!(cfg.analytics_source, None);
}

#[test]
fn blank_api_url_falls_back_to_default() {
    let cfg = WidgetConfig::from_lookup(lookup_from(&[("DOCS_CHAT_API_URL", " ")])).unwrap();
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
}

// =============================================================
// Errors
// =============================================================

#[test]
fn rejects_non_numeric_timeout() {
    let err = WidgetConfig::from_lookup(lookup_from(&[("DOCS_CHAT_TIMEOUT_SECS", "soon")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { key: "DOCS_CHAT_TIMEOUT_SECS", value: "soon".to_owned() });
}

#[test]
fn rejects_zero_timeout() {
    let err = WidgetConfig::from_lookup(lookup_from(&[("DOCS_CHAT_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { .. }));
}

#[test]
fn rejects_tag_id_with_script_characters() {
    let err = WidgetConfig::from_lookup(lookup_from(&[("DOCS_CHAT_GTAG_ID", "G-1');alert(1);//")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTagId(_)));
}

#[test]
fn config_error_messages_name_the_setting() {
    let err = ConfigError::InvalidNumber { key: "DOCS_CHAT_TIMEOUT_SECS", value: "x".to_owned() };
    assert_eq!(err.to_string(), "invalid DOCS_CHAT_TIMEOUT_SECS: \"x\" is not a positive integer");
}

// =============================================================
// Support failure copy
// =============================================================

#[test]
fn support_failure_message_names_configured_email() {
    let cfg = WidgetConfig { support_email: Some("help@example.com".to_owned()), ..WidgetConfig::default() };
    assert_eq!(
        cfg.support_failure_message(),
        "Failed to send support request. Please try again or email help@example.com directly."
    );
}

#[test]
fn support_failure_message_without_email() {
    assert_eq!(
        WidgetConfig::default().support_failure_message(),
        "Failed to send support request. Please try again later."
    );
}
