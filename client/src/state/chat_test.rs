use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_starts_with_greeting() {
    let state = ChatState::default();
    assert_eq!(state.len(), 1);
    let greeting = &state.messages()[0];
    assert_eq!(greeting.id, GREETING_ID);
    assert_eq!(greeting.sender, Sender::Ai);
    assert_eq!(greeting.content, GREETING);
}

#[test]
fn chat_state_default_not_generating() {
    assert!(!ChatState::default().generating);
}

// =============================================================
// Append / reset
// =============================================================

#[test]
fn push_appends_in_order_with_unique_ids() {
    let mut state = ChatState::new(1.0);
    state.push(Sender::User, "first", 2.0);
    state.push(Sender::Ai, "second", 3.0);

    let contents: Vec<_> = state.messages().iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec![GREETING, "first", "second"]);
    assert_ne!(state.messages()[1].id, state.messages()[2].id);
    assert!((state.messages()[2].timestamp - 3.0).abs() < f64::EPSILON);
}

#[test]
fn reset_restores_single_greeting() {
    let mut state = ChatState::new(1.0);
    state.push(Sender::User, "hello", 2.0);
    state.push(Sender::Ai, "hi", 3.0);
    state.reset(9.0);

    assert_eq!(state.len(), 1);
    assert_eq!(state.messages()[0].content, GREETING);
    assert!((state.messages()[0].timestamp - 9.0).abs() < f64::EPSILON);
}

#[test]
fn reset_keeps_in_flight_flag() {
    let mut state = ChatState::new(0.0);
    state.generating = true;
    state.reset(1.0);
    assert!(state.generating);
}

// =============================================================
// Sender
// =============================================================

#[test]
fn sender_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
    assert_eq!(serde_json::to_string(&Sender::Ai).unwrap(), "\"ai\"");
}
