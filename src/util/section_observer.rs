//! Section view tracking for documentation pages.
//!
//! Every second-level heading in the main content region is watched with a
//! full-visibility threshold. The first time a heading is fully in view, the
//! identifier of its enclosing `<section>` is reported once as a
//! `doc_section_view` event; later sightings of the same section are
//! suppressed for the rest of the page session.
//!
//! Independent of the chat widget: it runs with its own [`Analytics`]
//! reporter and needs no teardown.

#[cfg(test)]
#[path = "section_observer_test.rs"]
mod section_observer_test;

use std::collections::HashSet;

use super::analytics::{Analytics, AnalyticsEvent};

/// Container holding the page's documentation content.
pub const MAIN_CONTENT_SELECTOR: &str = "[role=main]";
pub const HEADING_SELECTOR: &str = "h2";
pub const VISIBILITY_THRESHOLD: f64 = 1.0;

/// Browsers report ratios like 0.9999 for fully visible elements.
const RATIO_TOLERANCE: f64 = 0.001;

/// Per-page set of sections already reported.
#[derive(Clone, Debug, Default)]
pub struct SectionViewTracker {
    sent: HashSet<String>,
}

impl SectionViewTracker {
    /// Record a sighting of the section with `section_id`.
    ///
    /// Returns the event to report on the first sighting of a non-empty id,
    /// `None` otherwise.
    pub fn record(&mut self, section_id: Option<&str>) -> Option<AnalyticsEvent> {
        let id = section_id.map(str::trim).filter(|id| !id.is_empty())?;
        if !self.sent.insert(id.to_owned()) {
            return None;
        }
        log::debug!("section viewed: {id}");
        Some(AnalyticsEvent::section_viewed(id))
    }

    #[must_use]
    pub fn reported(&self) -> usize {
        self.sent.len()
    }
}

/// Whether an intersection entry means the heading is fully in view.
#[must_use]
pub fn is_fully_visible(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio >= VISIBILITY_THRESHOLD - RATIO_TOLERANCE
}

/// Start watching headings on the current page. Does nothing when the page
/// has no main content region or no headings.
pub fn install(analytics: Analytics) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(Some(main)) = document.query_selector(MAIN_CONTENT_SELECTOR) else {
            log::debug!("no main content region; section tracking disabled");
            return;
        };
        let Ok(headings) = main.query_selector_all(HEADING_SELECTOR) else {
            return;
        };
        if headings.length() == 0 {
            return;
        }

        let mut tracker = SectionViewTracker::default();
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = entry.unchecked_into::<web_sys::IntersectionObserverEntry>();
                    if !is_fully_visible(entry.is_intersecting(), entry.intersection_ratio()) {
                        continue;
                    }
                    let section_id = entry.target().closest("section").ok().flatten().map(|section| section.id());
                    if let Some(event) = tracker.record(section_id.as_deref()) {
                        analytics.track(&event);
                    }
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(VISIBILITY_THRESHOLD));
        let observer =
            match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(e) => {
                    log::warn!("section tracking unavailable: {e:?}");
                    return;
                }
            };

        for i in 0..headings.length() {
            if let Some(heading) = headings.item(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                observer.observe(&heading);
            }
        }

        // Lives for the page session.
        callback.forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = analytics;
    }
}
