use super::*;

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_has_greeting() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::Assistant);
    assert_eq!(state.messages[0].content, GREETING);
}

#[test]
fn chat_state_default_not_asking() {
    let state = ChatState::default();
    assert!(!state.asking);
}

// =============================================================
// Transcript append
// =============================================================

#[test]
fn push_question_appends_and_sets_asking() {
    let mut state = ChatState::default();
    state.push_question("What about termination?");
    assert!(state.asking);
    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].role, Role::User);
}

#[test]
fn push_answer_appends_and_clears_asking() {
    let mut state = ChatState::default();
    state.push_question("q");
    state.push_answer("a");
    assert!(!state.asking);
    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.messages[2].role, Role::Assistant);
}

#[test]
fn abort_question_appends_nothing() {
    let mut state = ChatState::default();
    state.push_question("q");
    state.abort_question();
    assert!(!state.asking);
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn ids_are_strictly_increasing() {
    let mut state = ChatState::default();
    state.push_question("q1");
    state.push_answer("a1");
    state.push_question("q2");
    state.push_answer("a2");
    let ids: Vec<u64> = state.messages.iter().map(|m| m.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn n_questions_yield_greeting_plus_2n_messages() {
    let mut state = ChatState::default();
    for i in 0..5 {
        state.push_question(format!("q{i}"));
        state.push_answer(format!("a{i}"));
    }
    assert_eq!(state.messages.len(), 1 + 2 * 5);
    // Roles alternate after the greeting, in submission order.
    for (i, msg) in state.messages.iter().skip(1).enumerate() {
        let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
        assert_eq!(msg.role, expected);
    }
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    assert_eq!(
        serde_json::to_string(&Role::Assistant).unwrap(),
        "\"assistant\""
    );
}
