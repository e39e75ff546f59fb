//! A single transcript message bubble.

use leptos::prelude::*;

use crate::state::session::TranscriptMessage;
use crate::util::markup::{self, Segment};

#[component]
pub fn Message(message: TranscriptMessage) -> impl IntoView {
    let class = format!("docs-chat__message docs-chat__message--{}", message.role.as_str());

    view! {
        <div class=class class:docs-chat__message--error=message.is_error>
            {render_segments(&message.content)}
        </div>
    }
}

/// Text segments become escaped text nodes; links open in a new tab.
fn render_segments(content: &str) -> impl IntoView + use<> {
    markup::segments(content)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => text.into_any(),
            Segment::Link { text, href } => view! {
                <a href=href target="_blank" rel="noopener">{text}</a>
            }
            .into_any(),
        })
        .collect_view()
}

/// Three bouncing dots shown while an answer is pending.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="docs-chat__message docs-chat__message--assistant docs-chat__loading">
            <span></span>
            <span></span>
            <span></span>
        </div>
    }
}
