//! Widget stylesheet.
//!
//! The widget ships its own CSS so host pages need no extra assets. It is
//! rendered into `<head>` through `leptos_meta::Style` under
//! [`STYLE_ELEMENT_ID`] when the widget mounts, which happens once per page.
//! Colours fall back to the host theme's `--color-*` variables when present.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

pub const STYLE_ELEMENT_ID: &str = "docs-chat-styles";

pub const STYLESHEET: &str = r"
#docs-chat-button {
  position: fixed;
  bottom: 24px;
  right: 24px;
  z-index: 9999;
  padding: 14px 20px;
  background: linear-gradient(135deg, #6366f1 0%, #8b5cf6 100%);
  color: white;
  border: none;
  border-radius: 28px;
  cursor: pointer;
  font-size: 14px;
  font-weight: 500;
  font-family: system-ui, -apple-system, sans-serif;
  box-shadow: 0 4px 14px rgba(99, 102, 241, 0.4);
  transition: all 0.2s ease;
  display: flex;
  align-items: center;
  gap: 8px;
}
#docs-chat-button:hover {
  transform: translateY(-2px);
  box-shadow: 0 6px 20px rgba(99, 102, 241, 0.5);
}
#docs-chat-button svg {
  width: 18px;
  height: 18px;
}
#docs-chat-modal {
  display: none;
  position: fixed;
  bottom: 90px;
  right: 24px;
  width: 400px;
  max-width: calc(100vw - 48px);
  height: 520px;
  max-height: calc(100vh - 120px);
  background: var(--color-background-primary, #ffffff);
  border-radius: 16px;
  box-shadow: 0 8px 40px rgba(0, 0, 0, 0.15);
  z-index: 9999;
  flex-direction: column;
  overflow: hidden;
  font-family: system-ui, -apple-system, sans-serif;
}
#docs-chat-modal.open {
  display: flex;
}
.docs-chat__header {
  padding: 16px 20px;
  background: linear-gradient(135deg, #6366f1 0%, #8b5cf6 100%);
  color: white;
  display: flex;
  justify-content: space-between;
  align-items: center;
}
.docs-chat__header h3 {
  margin: 0;
  font-size: 15px;
  font-weight: 600;
}
.docs-chat__close {
  background: rgba(255, 255, 255, 0.2);
  border: none;
  color: white;
  width: 28px;
  height: 28px;
  border-radius: 50%;
  cursor: pointer;
  display: flex;
  align-items: center;
  justify-content: center;
}
.docs-chat__close:hover {
  background: rgba(255, 255, 255, 0.3);
}
.docs-chat__messages {
  flex: 1;
  overflow-y: auto;
  padding: 16px;
  display: flex;
  flex-direction: column;
  gap: 12px;
}
.docs-chat__message {
  max-width: 85%;
  padding: 10px 14px;
  border-radius: 12px;
  font-size: 14px;
  line-height: 1.5;
  word-wrap: break-word;
  white-space: pre-wrap;
}
.docs-chat__message--user {
  align-self: flex-end;
  background: linear-gradient(135deg, #6366f1 0%, #8b5cf6 100%);
  color: white;
  border-bottom-right-radius: 4px;
}
.docs-chat__message--assistant {
  align-self: flex-start;
  background: var(--color-background-secondary, #f3f4f6);
  color: var(--color-foreground-primary, #1f2937);
  border-bottom-left-radius: 4px;
}
.docs-chat__message--assistant a {
  color: #6366f1;
}
.docs-chat__message--error {
  background: #fef2f2;
  color: #991b1b;
}
.docs-chat__loading {
  display: flex;
  gap: 4px;
  padding: 12px 16px;
}
.docs-chat__loading span {
  width: 8px;
  height: 8px;
  background: #9ca3af;
  border-radius: 50%;
  animation: docs-chat-bounce 1.4s infinite ease-in-out both;
}
.docs-chat__loading span:nth-child(1) { animation-delay: -0.32s; }
.docs-chat__loading span:nth-child(2) { animation-delay: -0.16s; }
@keyframes docs-chat-bounce {
  0%, 80%, 100% { transform: scale(0); }
  40% { transform: scale(1); }
}
.docs-chat__input-row {
  padding: 12px 16px;
  border-top: 1px solid var(--color-background-border, #e5e7eb);
  display: flex;
  gap: 8px;
}
.docs-chat__input {
  flex: 1;
  padding: 10px 14px;
  border: 1px solid var(--color-background-border, #d1d5db);
  border-radius: 8px;
  font-size: 14px;
  outline: none;
  background: var(--color-background-primary, #ffffff);
  color: var(--color-foreground-primary, #1f2937);
}
.docs-chat__input:focus {
  border-color: #6366f1;
  box-shadow: 0 0 0 3px rgba(99, 102, 241, 0.1);
}
.docs-chat__send,
.docs-chat__support-submit {
  padding: 10px 16px;
  background: linear-gradient(135deg, #6366f1 0%, #8b5cf6 100%);
  color: white;
  border: none;
  border-radius: 8px;
  cursor: pointer;
  font-size: 14px;
  font-weight: 500;
}
.docs-chat__send:disabled,
.docs-chat__support-submit:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}
.docs-chat__footer {
  padding: 8px 16px;
  text-align: center;
  font-size: 11px;
  color: var(--color-foreground-muted, #6b7280);
  border-top: 1px solid var(--color-background-border, #e5e7eb);
}
.docs-chat__footer a {
  color: #6366f1;
  text-decoration: none;
}
.docs-chat__support-open {
  display: block;
  width: 100%;
  padding: 8px 12px;
  background: transparent;
  border: 1px solid #6366f1;
  color: #6366f1;
  border-radius: 6px;
  cursor: pointer;
  font-size: 12px;
}
.docs-chat__support-open:hover {
  background: rgba(99, 102, 241, 0.1);
}
.docs-chat__support-form {
  display: none;
  padding: 16px;
  flex-direction: column;
  gap: 12px;
}
.docs-chat__support-form.open {
  display: flex;
}
.docs-chat__support-form label {
  font-size: 12px;
  font-weight: 500;
  color: var(--color-foreground-primary, #374151);
}
.docs-chat__support-form input,
.docs-chat__support-form textarea {
  padding: 8px 12px;
  border: 1px solid var(--color-background-border, #d1d5db);
  border-radius: 6px;
  font-size: 13px;
  background: var(--color-background-primary, #ffffff);
  color: var(--color-foreground-primary, #1f2937);
}
.docs-chat__support-form textarea {
  min-height: 80px;
  resize: vertical;
}
.docs-chat__support-actions {
  display: flex;
  gap: 8px;
  justify-content: flex-end;
}
.docs-chat__support-cancel {
  padding: 8px 16px;
  background: transparent;
  border: 1px solid var(--color-background-border, #d1d5db);
  border-radius: 6px;
  cursor: pointer;
  font-size: 13px;
  color: var(--color-foreground-primary, #374151);
}
";
