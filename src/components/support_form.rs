//! Support escalation form shown in place of the transcript.

use leptos::html;
use leptos::prelude::*;

use crate::state::session::ChatSession;

#[component]
pub fn SupportForm(
    session: RwSignal<ChatSession>,
    email_ref: NodeRef<html::Input>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_open = Memo::new(move |_| session.with(|s| s.state().is_support_form_open));
    let pending = Memo::new(move |_| session.with(ChatSession::support_pending));

    view! {
        <div class="docs-chat__support-form" class:open=move || is_open.get()>
            <label>"Your Email"</label>
            <input
                type="email"
                placeholder="you@example.com"
                required
                node_ref=email_ref
                prop:value=move || session.with(|s| s.draft().email.clone())
                on:input=move |ev| session.update(|s| s.set_support_email(event_target_value(&ev)))
            />
            <label>"Subject"</label>
            <input
                type="text"
                placeholder="Brief description of your issue"
                prop:value=move || session.with(|s| s.draft().subject.clone())
                on:input=move |ev| session.update(|s| s.set_support_subject(event_target_value(&ev)))
            />
            <label>"Message"</label>
            <textarea
                placeholder="Please describe what you need help with..."
                prop:value=move || session.with(|s| s.draft().message.clone())
                on:input=move |ev| session.update(|s| s.set_support_message(event_target_value(&ev)))
            ></textarea>
            <div class="docs-chat__support-actions">
                <button class="docs-chat__support-cancel" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button
                    class="docs-chat__support-submit"
                    disabled=move || pending.get()
                    on:click=move |_| on_submit.run(())
                >
                    {move || session.with(ChatSession::submit_label)}
                </button>
            </div>
        </div>
    }
}
