use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::User).unwrap(), serde_json::json!("user"));
    assert_eq!(serde_json::to_value(Role::Assistant).unwrap(), serde_json::json!("assistant"));
    assert_eq!(Role::Assistant.as_str(), "assistant");
}

#[test]
fn turn_serializes_role_and_content() {
    let turn = ConversationTurn::new(Role::User, "What is X?");
    assert_eq!(
        serde_json::to_value(&turn).unwrap(),
        serde_json::json!({ "role": "user", "content": "What is X?" })
    );
}

// =============================================================
// ConversationHistory
// =============================================================

#[test]
fn history_default_is_empty() {
    let history = ConversationHistory::default();
    assert!(history.is_empty());
    assert_eq!(history.len(), 0);
    assert!(history.snapshot().is_empty());
}

#[test]
fn push_exchange_appends_user_then_assistant() {
    let mut history = ConversationHistory::default();
    history.push_exchange("q", "a");

    let turns = history.snapshot();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role(), Role::User);
    assert_eq!(turns[0].content(), "q");
    assert_eq!(turns[1].role(), Role::Assistant);
    assert_eq!(turns[1].content(), "a");
}

#[test]
fn history_never_exceeds_cap_and_keeps_latest_turns_in_order() {
    let mut history = ConversationHistory::default();
    for i in 0..8 {
        history.push_exchange(format!("q{i}"), format!("a{i}"));
        assert!(history.len() <= HISTORY_CAP);
    }

    assert_eq!(history.len(), HISTORY_CAP);
    let turns = history.snapshot();
    let contents: Vec<&str> = turns.iter().map(ConversationTurn::content).collect();
    assert_eq!(contents, vec!["q3", "a3", "q4", "a4", "q5", "a5", "q6", "a6", "q7", "a7"]);
}

#[test]
fn snapshot_is_independent_copy() {
    let mut history = ConversationHistory::default();
    history.push_exchange("q0", "a0");
    let snapshot = history.snapshot();

    history.push_exchange("q1", "a1");
    assert_eq!(snapshot.len(), 2);
    assert_eq!(history.len(), 4);
}

#[test]
fn clear_empties_history() {
    let mut history = ConversationHistory::default();
    history.push_exchange("q", "a");
    history.clear();
    assert!(history.is_empty());
}
