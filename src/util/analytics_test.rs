use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use super::*;

#[derive(Clone, Default)]
struct RecordingSink {
    calls: Rc<RefCell<Vec<(String, Map<String, Value>)>>>,
}

impl AnalyticsSink for RecordingSink {
    fn report(&self, event: &str, props: &Map<String, Value>) {
        self.calls.borrow_mut().push((event.to_owned(), props.clone()));
    }
}

// =============================================================
// Event constructors
// =============================================================

#[test]
fn chat_question_records_length_and_preview() {
    let event = AnalyticsEvent::chat_question("What is X?");
    assert_eq!(event.name, EVENT_CHAT_QUESTION);
    assert_eq!(event.props["question_length"], json!(10));
    assert_eq!(event.props["question_preview"], json!("What is X?"));
}

#[test]
fn chat_question_preview_is_truncated() {
    let long = "é".repeat(150);
    let event = AnalyticsEvent::chat_question(&long);
    assert_eq!(event.props["question_length"], json!(150));
    assert_eq!(event.props["question_preview"].as_str().unwrap().chars().count(), QUESTION_PREVIEW_CHARS);
}

#[test]
fn error_events_carry_message() {
    assert_eq!(AnalyticsEvent::chat_error("HTTP 500").props["error_message"], json!("HTTP 500"));
    assert_eq!(AnalyticsEvent::support_error("HTTP 502").props["error"], json!("HTTP 502"));
}

#[test]
fn section_viewed_carries_id() {
    let event = AnalyticsEvent::section_viewed("getting-started");
    assert_eq!(event.name, EVENT_SECTION_VIEW);
    assert_eq!(event.props["doc_section_view_id"], json!("getting-started"));
}

// =============================================================
// Analytics
// =============================================================

#[test]
fn track_attaches_page_and_source() {
    let sink = RecordingSink::default();
    let analytics = Analytics::new(Box::new(sink.clone()), "/guide/", Some("docs".to_owned()));

    analytics.track(&AnalyticsEvent::chat_response("answer"));

    let calls = sink.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, EVENT_CHAT_RESPONSE);
    assert_eq!(calls[0].1["page"], json!("/guide/"));
    assert_eq!(calls[0].1["source"], json!("docs"));
    assert_eq!(calls[0].1["response_length"], json!(6));
}

#[test]
fn track_without_source_omits_tag() {
    let sink = RecordingSink::default();
    let analytics = Analytics::new(Box::new(sink.clone()), "/", None);

    analytics.track(&AnalyticsEvent::section_viewed("intro"));

    let calls = sink.calls.borrow();
    assert!(!calls[0].1.contains_key("source"));
    assert_eq!(calls[0].1["page"], json!("/"));
}

#[test]
fn disabled_reporter_is_silent_noop() {
    let analytics = Analytics::disabled();
    analytics.track(&AnalyticsEvent::chat_opened());
    assert_eq!(analytics.page(), "/");
}

#[cfg(not(feature = "csr"))]
#[test]
fn from_page_falls_back_to_noop_outside_browser() {
    let analytics = Analytics::from_page(Some("docs".to_owned()));
    analytics.track(&AnalyticsEvent::support_sent());
    assert_eq!(analytics.page(), "/");
}
