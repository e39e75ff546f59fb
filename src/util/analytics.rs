//! Fire-and-forget analytics reporting.
//!
//! DESIGN
//! ======
//! Events are plain values built by the state layer; delivery goes through
//! an injected [`AnalyticsSink`] chosen once at construction. When the page
//! has no tag-manager `gtag` function the sink is a no-op, so reporting can
//! never fail or block the widget.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use serde_json::{Map, Value};

pub const EVENT_CHAT_OPENED: &str = "ai_chat_opened";
pub const EVENT_CHAT_QUESTION: &str = "ai_chat_question";
pub const EVENT_CHAT_RESPONSE: &str = "ai_chat_response";
pub const EVENT_CHAT_ERROR: &str = "ai_chat_error";
pub const EVENT_SUPPORT_SENT: &str = "support_request_sent";
pub const EVENT_SUPPORT_ERROR: &str = "support_request_error";
pub const EVENT_SECTION_VIEW: &str = "doc_section_view";

/// Maximum characters of a question included in its preview property.
pub const QUESTION_PREVIEW_CHARS: usize = 100;

/// A named analytics event with its event-specific properties.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub props: Map<String, Value>,
}

impl AnalyticsEvent {
    fn new(name: &'static str) -> Self {
        Self { name, props: Map::new() }
    }

    fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.props.insert(key.to_owned(), value.into());
        self
    }

    #[must_use]
    pub fn chat_opened() -> Self {
        Self::new(EVENT_CHAT_OPENED)
    }

    #[must_use]
    pub fn chat_question(question: &str) -> Self {
        let preview: String = question.chars().take(QUESTION_PREVIEW_CHARS).collect();
        Self::new(EVENT_CHAT_QUESTION)
            .with("question_length", question.chars().count())
            .with("question_preview", preview)
    }

    #[must_use]
    pub fn chat_response(answer: &str) -> Self {
        Self::new(EVENT_CHAT_RESPONSE).with("response_length", answer.chars().count())
    }

    #[must_use]
    pub fn chat_error(message: &str) -> Self {
        Self::new(EVENT_CHAT_ERROR).with("error_message", message)
    }

    #[must_use]
    pub fn support_sent() -> Self {
        Self::new(EVENT_SUPPORT_SENT)
    }

    #[must_use]
    pub fn support_error(message: &str) -> Self {
        Self::new(EVENT_SUPPORT_ERROR).with("error", message)
    }

    #[must_use]
    pub fn section_viewed(section_id: &str) -> Self {
        Self::new(EVENT_SECTION_VIEW).with("doc_section_view_id", section_id)
    }
}

/// Destination for analytics events. Implementations must swallow their
/// own failures.
pub trait AnalyticsSink {
    fn report(&self, event: &str, props: &Map<String, Value>);
}

/// Sink used when no reporting function is available.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn report(&self, _event: &str, _props: &Map<String, Value>) {}
}

/// Sink forwarding to the page's global `gtag('event', name, props)`.
#[cfg(feature = "csr")]
pub struct GtagSink {
    gtag: js_sys::Function,
}

#[cfg(feature = "csr")]
impl GtagSink {
    /// Look up `window.gtag`; `None` when absent or not callable.
    pub fn resolve() -> Option<Self> {
        use wasm_bindgen::JsCast;

        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &"gtag".into()).ok()?;
        let gtag = value.dyn_into::<js_sys::Function>().ok()?;
        Some(Self { gtag })
    }
}

#[cfg(feature = "csr")]
impl AnalyticsSink for GtagSink {
    fn report(&self, event: &str, props: &Map<String, Value>) {
        let Ok(json) = serde_json::to_string(props) else {
            return;
        };
        let Ok(params) = js_sys::JSON::parse(&json) else {
            return;
        };
        if let Err(e) = self.gtag.call3(&wasm_bindgen::JsValue::NULL, &"event".into(), &event.into(), &params) {
            log::debug!("analytics report failed: {e:?}");
        }
    }
}

/// Reporter bound to one page: attaches `page` and the optional `source`
/// discriminator to every event before handing it to the sink.
pub struct Analytics {
    sink: Box<dyn AnalyticsSink>,
    page: String,
    source: Option<String>,
}

impl Analytics {
    pub fn new(sink: Box<dyn AnalyticsSink>, page: impl Into<String>, source: Option<String>) -> Self {
        Self { sink, page: page.into(), source }
    }

    /// Reporter for the current page, using `gtag` when the page defines it.
    #[must_use]
    pub fn from_page(source: Option<String>) -> Self {
        Self::new(default_sink(), super::page::current_path(), source)
    }

    /// A reporter that drops everything.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Box::new(NoopSink), "/", None)
    }

    #[must_use]
    pub fn page(&self) -> &str {
        &self.page
    }

    /// Final property map sent for `event`.
    #[must_use]
    pub fn properties(&self, event: &AnalyticsEvent) -> Map<String, Value> {
        let mut props = event.props.clone();
        props.insert("page".to_owned(), Value::String(self.page.clone()));
        if let Some(source) = &self.source {
            props.insert("source".to_owned(), Value::String(source.clone()));
        }
        props
    }

    pub fn track(&self, event: &AnalyticsEvent) {
        self.sink.report(event.name, &self.properties(event));
    }
}

fn default_sink() -> Box<dyn AnalyticsSink> {
    #[cfg(feature = "csr")]
    {
        if let Some(sink) = GtagSink::resolve() {
            return Box::new(sink);
        }
    }
    Box::new(NoopSink)
}
