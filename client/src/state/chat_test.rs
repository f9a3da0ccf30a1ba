use super::*;

fn submitted(state: &mut ChatState, text: &str) -> AskRequest {
    state.input = text.to_owned();
    state.submit(1.0).expect("submit should be accepted")
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn fresh_state_holds_exactly_the_greeting() {
    let state = ChatState::default();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::Assistant);
    assert_eq!(state.messages[0].body, GREETING);
}

#[test]
fn fresh_state_is_closed_and_not_pending() {
    let state = ChatState::default();
    assert!(!state.open);
    assert!(!state.pending);
    assert!(state.input.is_empty());
    assert!(!state.user_has_sent);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_visibility() {
    let mut state = ChatState::default();
    state.toggle();
    assert!(state.open);
}

#[test]
fn toggle_twice_restores_visibility() {
    let mut state = ChatState::default();
    state.toggle();
    state.toggle();
    assert!(!state.open);
}

#[test]
fn toggle_does_not_touch_transcript_or_input() {
    let mut state = ChatState::default();
    state.input = "draft".to_owned();
    state.toggle();
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.input, "draft");
}

// =============================================================
// submit gating
// =============================================================

#[test]
fn empty_input_is_rejected() {
    let mut state = ChatState::default();
    assert!(state.submit(1.0).is_none());
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn whitespace_only_input_is_rejected() {
    let mut state = ChatState::default();
    state.input = "   \t  ".to_owned();
    assert!(state.submit(1.0).is_none());
    assert_eq!(state.messages.len(), 1);
    assert!(!state.pending);
}

#[test]
fn submit_while_pending_is_rejected() {
    let mut state = ChatState::default();
    submitted(&mut state, "first");

    state.input = "second".to_owned();
    assert!(state.submit(2.0).is_none());
    // The rejected attempt must not consume the buffer or grow the transcript.
    assert_eq!(state.input, "second");
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn can_submit_tracks_input_and_pending() {
    let mut state = ChatState::default();
    assert!(!state.can_submit());
    state.input = "hello".to_owned();
    assert!(state.can_submit());
    state.submit(1.0);
    state.input = "again".to_owned();
    assert!(!state.can_submit());
}

// =============================================================
// submit effects
// =============================================================

#[test]
fn accepted_submit_appends_user_message_and_clears_input() {
    let mut state = ChatState::default();
    let req = submitted(&mut state, "  Tell me about your experience  ");

    assert_eq!(state.messages.len(), 2);
    let last = state.messages.last().unwrap();
    assert_eq!(last.role, Role::User);
    assert_eq!(last.body, "Tell me about your experience");
    assert_eq!(req.message, "Tell me about your experience");
    assert!(state.input.is_empty());
    assert!(state.pending);
    assert!(state.user_has_sent);
}

#[test]
fn request_history_is_the_transcript_before_the_new_turn() {
    let mut state = ChatState::default();
    let req = submitted(&mut state, "Hello");

    assert_eq!(req.history.len(), 1);
    assert_eq!(req.history[0].role, Role::Assistant);
    assert_eq!(req.history[0].content, GREETING);
}

#[test]
fn second_exchange_carries_full_prior_transcript_in_order() {
    let mut state = ChatState::default();
    submitted(&mut state, "Hello");
    state.resolve("Hi there".to_owned(), 2.0);

    let req = submitted(&mut state, "What are your skills?");
    let roles: Vec<Role> = req.history.iter().map(|h| h.role).collect();
    assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
    assert_eq!(req.history[1].content, "Hello");
    assert_eq!(req.history[2].content, "Hi there");
}

#[test]
fn message_ids_are_distinct() {
    let mut state = ChatState::default();
    submitted(&mut state, "one");
    state.resolve("two".to_owned(), 2.0);
    let ids: Vec<&str> = state.messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids.len(), 3);
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_appends_assistant_reply_and_clears_pending() {
    let mut state = ChatState::default();
    submitted(&mut state, "Hello");
    state.resolve("Hi! How can I help?".to_owned(), 2.0);

    assert_eq!(state.messages.len(), 3);
    let last = state.messages.last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.body, "Hi! How can I help?");
    assert!(!state.pending);
}

#[test]
fn transcript_grows_by_two_per_cycle_user_first() {
    let mut state = ChatState::default();
    for turn in 0..3 {
        let before = state.messages.len();
        submitted(&mut state, &format!("question {turn}"));
        state.resolve(format!("answer {turn}"), 2.0);
        assert_eq!(state.messages.len(), before + 2);
        assert_eq!(state.messages[before].role, Role::User);
        assert_eq!(state.messages[before + 1].role, Role::Assistant);
    }
}

#[test]
fn input_is_accepted_again_after_resolution() {
    let mut state = ChatState::default();
    submitted(&mut state, "first");
    state.resolve("reply".to_owned(), 2.0);

    state.input = "second".to_owned();
    assert!(state.submit(3.0).is_some());
}

// =============================================================
// quick questions
// =============================================================

#[test]
fn quick_fill_sets_input_without_submitting() {
    let mut state = ChatState::default();
    state.quick_fill(QUICK_QUESTIONS[0]);
    assert_eq!(state.input, QUICK_QUESTIONS[0]);
    assert_eq!(state.messages.len(), 1);
    assert!(!state.pending);
}

#[test]
fn quick_questions_offered_only_before_first_exchange() {
    let mut state = ChatState::default();
    assert!(state.offers_quick_questions());

    submitted(&mut state, "Hello");
    assert!(!state.offers_quick_questions());

    state.resolve("Hi".to_owned(), 2.0);
    assert!(!state.offers_quick_questions());
}

#[test]
fn quick_fill_is_a_no_op_after_first_send() {
    let mut state = ChatState::default();
    submitted(&mut state, "Hello");
    state.resolve("Hi".to_owned(), 2.0);

    state.quick_fill(QUICK_QUESTIONS[1]);
    assert!(state.input.is_empty());
}

// =============================================================
// fallback selection
// =============================================================

#[test]
fn empty_reply_maps_to_generic_fallback() {
    assert_eq!(fallback_for(&AskError::EmptyReply), FALLBACK_EMPTY);
}

#[test]
fn transport_failures_map_to_unreachable_fallback() {
    assert_eq!(fallback_for(&AskError::Transport("dns".to_owned())), FALLBACK_UNREACHABLE);
    assert_eq!(fallback_for(&AskError::Status(500)), FALLBACK_UNREACHABLE);
    assert_eq!(fallback_for(&AskError::Timeout(20)), FALLBACK_UNREACHABLE);
}

#[test]
fn unreachable_fallback_names_the_contact_email() {
    assert!(FALLBACK_UNREACHABLE.contains("krishkrishnan2001@gmail.com"));
}
