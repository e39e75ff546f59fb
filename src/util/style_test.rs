use super::*;

#[test]
fn stylesheet_covers_widget_hooks() {
    for selector in [
        "#docs-chat-button",
        "#docs-chat-modal.open",
        ".docs-chat__message--user",
        ".docs-chat__message--assistant",
        ".docs-chat__message--error",
        ".docs-chat__loading",
        ".docs-chat__support-form.open",
        ".docs-chat__send:disabled",
    ] {
        assert!(STYLESHEET.contains(selector), "missing {selector}");
    }
}

#[test]
fn stylesheet_braces_are_balanced() {
    let open = STYLESHEET.matches('{').count();
    let close = STYLESHEET.matches('}').count();
    assert_eq!(open, close);
}

#[test]
fn every_role_has_a_message_style() {
    use crate::state::conversation::Role;

    for role in [Role::User, Role::Assistant] {
        let selector = format!(".docs-chat__message--{}", role.as_str());
        assert!(STYLESHEET.contains(&selector), "missing {selector}");
    }
}
