//! Floating chat button and modal panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only place that touches the DOM for the chat flow. User input
//! is turned into `ChatSession` transitions; the `Effect`s they return are
//! applied here (focus, scroll, alerts, analytics, HTTP). HTTP completions
//! are fed back into the session as further transitions.

use leptos::html;
use leptos::prelude::*;
use leptos_meta::{Style, provide_meta_context};

use super::message::{LoadingIndicator, Message};
use super::support_form::SupportForm;
use crate::config::WidgetConfig;
use crate::net::api::{self, ApiError};
use crate::net::cancel::CancelToken;
use crate::state::effect::{Effect, FocusTarget};
use crate::state::session::ChatSession;
use crate::util::analytics::Analytics;
use crate::util::page;
use crate::util::style::{STYLE_ELEMENT_ID, STYLESHEET};

pub const BUTTON_ID: &str = "docs-chat-button";
pub const MODAL_ID: &str = "docs-chat-modal";

const POWERED_BY_URL: &str = "https://cloud.google.com/vertex-ai";

const CHAT_ICON_SVG: &str = r#"<svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"></path></svg>"#;
const CLOSE_ICON_SVG: &str = r#"<svg width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M18 6L6 18M6 6l12 12"></path></svg>"#;

/// Mount the widget at the end of `<body>` unless it is already present.
pub fn mount(config: WidgetConfig) {
    #[cfg(feature = "csr")]
    {
        let already_mounted = web_sys::window()
            .and_then(|w| w.document())
            .is_some_and(|d| d.get_element_by_id(BUTTON_ID).is_some());
        if already_mounted {
            log::warn!("docs chat widget already mounted");
            return;
        }

        let analytics = Analytics::from_page(config.analytics_source.clone());
        leptos::mount::mount_to_body(move || view! { <ChatWidget config analytics/> });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}

/// Reactive handles shared by every event handler and async completion.
#[derive(Clone, Copy)]
struct WidgetHandles {
    session: RwSignal<ChatSession>,
    config: StoredValue<WidgetConfig>,
    analytics: StoredValue<Analytics, LocalStorage>,
    in_flight: StoredValue<Option<CancelToken>, LocalStorage>,
    chat_input: NodeRef<html::Input>,
    support_email: NodeRef<html::Input>,
    messages: NodeRef<html::Div>,
}

impl WidgetHandles {
    /// Run a session transition and apply the effects it returns. A disposed
    /// session (widget unmounted) yields no effects.
    fn dispatch(self, transition: impl FnOnce(&mut ChatSession) -> Vec<Effect>) {
        let effects = self.session.try_update(transition).unwrap_or_default();
        self.apply(effects);
    }

    fn apply(self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Focus(target) => self.focus(target),
                Effect::ScrollToBottom => self.scroll_to_bottom(),
                Effect::Alert(message) => page::alert(&message),
                Effect::Track(event) => {
                    self.analytics.try_with_value(|analytics| analytics.track(&event));
                }
                Effect::SendChat { request_id, request } => self.start_chat(request_id, request),
                Effect::SubmitSupport(request) => self.start_support(request),
            }
        }
    }

    fn start_chat(self, request_id: u64, request: crate::net::types::ChatRequest) {
        let Some((url, timeout)) = self.config.try_with_value(|c| (c.api_url.clone(), c.request_timeout)) else {
            return;
        };
        let token = CancelToken::new();
        self.in_flight.try_update_value(|slot| *slot = Some(token.clone()));

        leptos::task::spawn_local(async move {
            let result = api::post_chat(&url, &request, timeout, &token).await;
            self.in_flight.try_update_value(|slot| *slot = None);
            self.dispatch(move |s| s.complete_send(request_id, result));
        });
    }

    fn start_support(self, request: crate::net::types::SupportRequest) {
        let Some((url, timeout, failure_message)) = self
            .config
            .try_with_value(|c| (c.support_url.clone(), c.request_timeout, c.support_failure_message()))
        else {
            return;
        };

        leptos::task::spawn_local(async move {
            let result = match url {
                Some(url) => api::post_support(&url, &request, timeout, &CancelToken::new()).await,
                None => Err(ApiError::Unavailable),
            };
            self.dispatch(move |s| s.complete_support(result, &failure_message));
        });
    }

    fn focus(self, target: FocusTarget) {
        let node = match target {
            FocusTarget::ChatInput => self.chat_input,
            FocusTarget::SupportEmail => self.support_email,
        };
        #[cfg(feature = "csr")]
        {
            // Wait for the visibility change to render before focusing.
            request_animation_frame(move || {
                if let Some(el) = node.get_untracked() {
                    let _ = el.focus();
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = node;
        }
    }

    fn scroll_to_bottom(self) {
        let messages = self.messages;
        #[cfg(feature = "csr")]
        {
            request_animation_frame(move || {
                if let Some(el) = messages.get_untracked() {
                    el.set_scroll_top(el.scroll_height());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = messages;
        }
    }

    fn cancel_in_flight(self) {
        self.in_flight.try_update_value(|slot| {
            if let Some(token) = slot.take() {
                token.cancel();
            }
        });
    }
}

/// The floating "Ask AI" button plus the chat modal.
#[component]
pub fn ChatWidget(config: WidgetConfig, analytics: Analytics) -> impl IntoView {
    provide_meta_context();

    let title = config.title();
    let placeholder = config.placeholder.clone();
    let support_enabled = config.support_enabled();
    let session = RwSignal::new(ChatSession::from_config(&config, analytics.page()));

    let handles = WidgetHandles {
        session,
        config: StoredValue::new(config),
        analytics: StoredValue::new_local(analytics),
        in_flight: StoredValue::new_local(None),
        chat_input: NodeRef::new(),
        support_email: NodeRef::new(),
        messages: NodeRef::new(),
    };
    let button_ref = NodeRef::<html::Button>::new();
    let modal_ref = NodeRef::<html::Div>::new();

    let state = Memo::new(move |_| session.with(ChatSession::state));
    let transcript = Memo::new(move |_| session.with(|s| s.transcript().to_vec()));
    let form_open = move || state.get().is_support_form_open;
    let chat_display = move || if form_open() { "none" } else { "flex" };

    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let escape = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && state.get_untracked().is_open {
                handles.dispatch(ChatSession::close);
            }
        });

        // Clicks anywhere outside the panel and its button close the panel.
        let outside_click = window_event_listener(leptos::ev::click, move |ev| {
            if !state.get_untracked().is_open {
                return;
            }
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
                return;
            };
            let in_modal = modal_ref.get_untracked().is_some_and(|m| m.contains(Some(&target)));
            let in_button = button_ref.get_untracked().is_some_and(|b| b.contains(Some(&target)));
            if !in_modal && !in_button {
                handles.dispatch(ChatSession::close);
            }
        });

        on_cleanup(move || {
            escape.remove();
            outside_click.remove();
        });
    }

    on_cleanup(move || {
        handles.cancel_in_flight();
        session.try_update(ChatSession::teardown);
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            handles.dispatch(ChatSession::send);
        }
    };

    let on_support_submit = Callback::new(move |()| handles.dispatch(ChatSession::submit_support));
    let on_support_cancel = Callback::new(move |()| handles.dispatch(ChatSession::close_support_form));

    view! {
        <Style id=STYLE_ELEMENT_ID>{STYLESHEET}</Style>

        <button id=BUTTON_ID node_ref=button_ref on:click=move |_| handles.dispatch(ChatSession::toggle)>
            <span class="docs-chat__icon" inner_html=CHAT_ICON_SVG></span>
            "Ask AI"
        </button>

        <div id=MODAL_ID node_ref=modal_ref class:open=move || state.get().is_open>
            <div class="docs-chat__header">
                <h3>{title}</h3>
                <button
                    class="docs-chat__close"
                    aria-label="Close chat"
                    inner_html=CLOSE_ICON_SVG
                    on:click=move |_| handles.dispatch(ChatSession::toggle)
                ></button>
            </div>

            <div class="docs-chat__messages" node_ref=handles.messages style:display=chat_display>
                <For
                    each=move || transcript.get()
                    key=|message| message.id.clone()
                    children=|message| view! { <Message message/> }
                />
                {move || state.get().is_loading.then(|| view! { <LoadingIndicator/> })}
            </div>

            {support_enabled
                .then(|| {
                    view! {
                        <SupportForm
                            session
                            email_ref=handles.support_email
                            on_submit=on_support_submit
                            on_cancel=on_support_cancel
                        />
                    }
                })}

            <div class="docs-chat__input-row" style:display=chat_display>
                <input
                    class="docs-chat__input"
                    type="text"
                    placeholder=placeholder
                    node_ref=handles.chat_input
                    prop:value=move || session.with(|s| s.input().to_owned())
                    on:input=move |ev| session.update(|s| s.set_input(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button
                    class="docs-chat__send"
                    disabled=move || state.get().is_loading
                    on:click=move |_| handles.dispatch(ChatSession::send)
                >
                    "Send"
                </button>
            </div>

            <div class="docs-chat__footer">
                {if support_enabled {
                    view! {
                        <button
                            class="docs-chat__support-open"
                            on:click=move |_| handles.dispatch(ChatSession::open_support_form)
                        >
                            "Contact Support"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <span>
                            "Powered by "
                            <a href=POWERED_BY_URL target="_blank" rel="noopener">"Vertex AI"</a>
                        </span>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
