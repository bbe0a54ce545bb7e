use std::time::Duration;

use super::*;

fn open_conversation() -> Conversation {
    let mut conversation = Conversation::new();
    conversation.open();
    conversation
}

fn transport_failure() -> AssistantError {
    AssistantError::Transport("connection refused".to_owned())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_conversation_starts_closed_and_idle() {
    let conversation = Conversation::new();
    assert_eq!(conversation.visibility(), Visibility::Closed);
    assert!(!conversation.is_open());
    assert!(conversation.transcript().is_empty());
    assert!(!conversation.is_pending());
    assert_eq!(conversation.last_error(), None);
    assert!(conversation.suggestions_visible());
    assert_eq!(conversation.activity(), &Activity::Idle);
}

#[test]
fn suggested_questions_are_in_display_order() {
    assert_eq!(SUGGESTED_QUESTIONS.len(), 5);
    assert_eq!(SUGGESTED_QUESTIONS[0], "What services do you offer?");
    assert_eq!(SUGGESTED_QUESTIONS[4], "What types of projects do you work on?");
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn toggle_flips_between_closed_and_open() {
    let mut conversation = Conversation::new();
    assert_eq!(conversation.toggle_visibility(), Visibility::Open);
    assert_eq!(conversation.toggle_visibility(), Visibility::Closed);
}

#[test]
fn close_is_noop_when_already_closed() {
    let mut conversation = Conversation::new();
    assert!(!conversation.close());
    assert_eq!(conversation.visibility(), Visibility::Closed);
}

#[test]
fn open_reports_whether_it_changed_visibility() {
    let mut conversation = Conversation::new();
    assert!(conversation.open());
    assert!(!conversation.open());
    assert!(conversation.close());
}

#[test]
fn visibility_round_trip_preserves_transcript_and_error() {
    let mut conversation = open_conversation();
    let turn = conversation.submit("hello", "10:00 AM").unwrap();
    conversation.complete(turn.turn, Err(transport_failure()), "10:01 AM");
    let before = conversation.transcript().to_vec();

    conversation.toggle_visibility();
    conversation.toggle_visibility();

    assert_eq!(conversation.transcript(), before.as_slice());
    assert!(!conversation.is_pending());
    assert_eq!(conversation.last_error(), Some(FAILURE_NOTICE));
}

#[test]
fn visibility_round_trip_preserves_pending_turn() {
    let mut conversation = open_conversation();
    conversation.submit("hello", "10:00 AM").unwrap();

    conversation.close();
    conversation.open();

    assert!(conversation.is_pending());
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_appends_trimmed_user_message() {
    let mut conversation = open_conversation();
    let turn = conversation.submit("  hello  ", "09:15 AM").unwrap();

    assert_eq!(turn.prompt, "hello");
    let [message] = conversation.transcript() else {
        panic!("expected a single message");
    };
    assert_eq!(message.text, "hello");
    assert_eq!(message.sender, Sender::User);
    assert_eq!(message.timestamp, "09:15 AM");
    assert!(conversation.is_pending());
}

#[test]
fn submit_trim_matches_untrimmed_text() {
    let mut padded = open_conversation();
    let mut plain = open_conversation();
    padded.submit("  hello  ", "t").unwrap();
    plain.submit("hello", "t").unwrap();
    assert_eq!(padded.transcript()[0].text, plain.transcript()[0].text);
}

#[test]
fn submit_empty_or_whitespace_is_noop() {
    for text in ["", "   ", "\n\t "] {
        let mut conversation = open_conversation();
        let turn = conversation.submit("first", "t").unwrap();
        conversation.complete(turn.turn, Err(transport_failure()), "t");
        let before = conversation.transcript().to_vec();

        assert_eq!(conversation.submit(text, "t"), Err(SubmitRejected::Empty));
        assert_eq!(conversation.transcript(), before.as_slice());
        assert!(!conversation.is_pending());
        assert_eq!(conversation.last_error(), Some(FAILURE_NOTICE));
    }
}

#[test]
fn submit_empty_does_not_latch_suggestions() {
    let mut conversation = open_conversation();
    let _ = conversation.submit("   ", "t");
    assert!(conversation.suggestions_visible());
}

#[test]
fn submit_while_closed_is_rejected() {
    let mut conversation = Conversation::new();
    assert_eq!(conversation.submit("hello", "t"), Err(SubmitRejected::Closed));
    assert!(conversation.transcript().is_empty());
    assert!(conversation.suggestions_visible());
}

#[test]
fn submit_while_pending_is_rejected() {
    let mut conversation = open_conversation();
    conversation.submit("first", "t").unwrap();

    assert_eq!(conversation.submit("second", "t"), Err(SubmitRejected::Busy));
    assert_eq!(conversation.transcript().len(), 1);
}

#[test]
fn rapid_submits_start_a_single_turn() {
    let mut conversation = open_conversation();
    let started = (0..10)
        .filter_map(|i| conversation.submit(&format!("message {i}"), "t").ok())
        .count();
    assert_eq!(started, 1);
    assert!(conversation.is_pending());
}

#[test]
fn can_send_tracks_draft_visibility_and_pending() {
    let mut conversation = Conversation::new();
    assert!(!conversation.can_send("hi"));

    conversation.open();
    assert!(conversation.can_send("hi"));
    assert!(!conversation.can_send("   "));

    conversation.submit("hi", "t").unwrap();
    assert!(!conversation.can_send("again"));
}

#[test]
fn new_submit_clears_previous_error() {
    let mut conversation = open_conversation();
    let turn = conversation.submit("first", "t").unwrap();
    conversation.complete(turn.turn, Err(transport_failure()), "t");
    assert!(conversation.last_error().is_some());

    conversation.submit("second", "t").unwrap();
    assert_eq!(conversation.last_error(), None);
    assert!(conversation.is_pending());
}

#[test]
fn message_ids_increase_in_append_order() {
    let mut conversation = open_conversation();
    for text in ["one", "two", "three"] {
        let turn = conversation.submit(text, "t").unwrap();
        conversation.complete(turn.turn, Ok(format!("re: {text}")), "t");
    }

    let ids = conversation.transcript().iter().map(|m| m.id.get()).collect::<Vec<_>>();
    assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
}

// =============================================================
// Suggestions
// =============================================================

#[test]
fn select_suggestion_behaves_like_submit() {
    let mut conversation = open_conversation();
    let turn = conversation.select_suggestion(SUGGESTED_QUESTIONS[1], "t").unwrap();

    assert_eq!(turn.prompt, "What are your rates?");
    assert_eq!(conversation.transcript()[0].text, "What are your rates?");
    assert_eq!(conversation.transcript()[0].sender, Sender::User);
    assert!(conversation.is_pending());
}

#[test]
fn suggestions_latch_after_first_send() {
    let mut conversation = open_conversation();
    let turn = conversation.submit("hello", "t").unwrap();
    assert!(!conversation.suggestions_visible());

    conversation.complete(turn.turn, Err(transport_failure()), "t");
    conversation.close();
    conversation.open();
    assert!(!conversation.suggestions_visible());
}

#[test]
fn select_suggestion_rejected_after_first_send() {
    let mut conversation = open_conversation();
    let turn = conversation.select_suggestion(SUGGESTED_QUESTIONS[0], "t").unwrap();
    conversation.complete(turn.turn, Ok("We build things.".to_owned()), "t");

    assert_eq!(
        conversation.select_suggestion(SUGGESTED_QUESTIONS[2], "t"),
        Err(SubmitRejected::SuggestionsHidden)
    );
    assert_eq!(conversation.transcript().len(), 2);
}

// =============================================================
// Completion
// =============================================================

#[test]
fn scenario_rates_question_gets_reply() {
    let mut conversation = Conversation::new();
    conversation.toggle_visibility();
    let turn = conversation.submit("What are your rates?", "02:30 PM").unwrap();
    let resolution = conversation.complete(turn.turn, Ok("Rates start at $X".to_owned()), "02:31 PM");

    assert!(matches!(resolution, TurnResolution::Replied(_)));
    let texts = conversation
        .transcript()
        .iter()
        .map(|m| (m.sender, m.text.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        texts,
        vec![(Sender::User, "What are your rates?"), (Sender::Assistant, "Rates start at $X")]
    );
    assert_eq!(conversation.transcript()[1].timestamp, "02:31 PM");
    assert!(!conversation.is_pending());
    assert_eq!(conversation.last_error(), None);
}

#[test]
fn failing_endpoint_keeps_user_message_only() {
    let mut conversation = open_conversation();
    let turn = conversation.submit("What services do you offer?", "t").unwrap();
    let resolution = conversation.complete(turn.turn, Err(AssistantError::Status(502)), "t");

    assert_eq!(resolution, TurnResolution::Failed);
    let [message] = conversation.transcript() else {
        panic!("expected only the user message");
    };
    assert_eq!(message.sender, Sender::User);
    assert_eq!(message.text, "What services do you offer?");
    assert!(!conversation.is_pending());
    assert_eq!(conversation.last_error(), Some(FAILURE_NOTICE));
}

#[test]
fn timeout_surfaces_the_same_notice() {
    let mut conversation = open_conversation();
    let turn = conversation.submit("hello", "t").unwrap();
    conversation.complete(turn.turn, Err(AssistantError::Timeout(Duration::from_secs(30))), "t");

    assert_eq!(conversation.last_error(), Some(FAILURE_NOTICE));
    assert_eq!(conversation.transcript().len(), 1);
}

#[test]
fn blank_reply_uses_fallback_placeholder() {
    let mut conversation = open_conversation();
    let turn = conversation.submit("hello", "t").unwrap();
    conversation.complete(turn.turn, Ok("   ".to_owned()), "t");

    assert_eq!(conversation.transcript()[1].text, FALLBACK_REPLY);
}

#[test]
fn padded_reply_is_stored_trimmed() {
    let mut conversation = open_conversation();
    let turn = conversation.submit("hello", "t").unwrap();
    conversation.complete(turn.turn, Ok("\n  hi there \t".to_owned()), "t");

    assert_eq!(conversation.transcript()[1].text, "hi there");
}

#[test]
fn completion_while_closed_still_updates_transcript() {
    let mut conversation = open_conversation();
    let turn = conversation.submit("hello", "t").unwrap();
    conversation.close();

    conversation.complete(turn.turn, Ok("hi there".to_owned()), "t");
    conversation.open();

    assert_eq!(conversation.transcript().len(), 2);
    assert!(!conversation.is_pending());
}

#[test]
fn stale_completion_is_ignored() {
    let mut conversation = open_conversation();
    let first = conversation.submit("first", "t").unwrap();
    conversation.complete(first.turn, Ok("reply".to_owned()), "t");
    let second = conversation.submit("second", "t").unwrap();

    let resolution = conversation.complete(first.turn, Err(transport_failure()), "t");

    assert_eq!(resolution, TurnResolution::Stale);
    assert_eq!(conversation.activity(), &Activity::Awaiting { turn: second.turn });
    assert_eq!(conversation.transcript().len(), 3);
}

#[test]
fn completion_without_pending_turn_is_stale() {
    let mut conversation = open_conversation();
    let turn = conversation.submit("hello", "t").unwrap();
    conversation.complete(turn.turn, Ok("hi".to_owned()), "t");

    assert_eq!(conversation.complete(turn.turn, Ok("again".to_owned()), "t"), TurnResolution::Stale);
    assert_eq!(conversation.transcript().len(), 2);
}

#[test]
fn transcript_is_append_only_across_operations() {
    let mut conversation = Conversation::new();
    let mut snapshot: Vec<Message> = Vec::new();
    let mut pending = None;

    for step in 0..40 {
        match step % 5 {
            0 => {
                conversation.toggle_visibility();
            }
            1 | 2 => {
                if let Ok(turn) = conversation.submit(&format!("message {step}"), "t") {
                    pending = Some(turn.turn);
                }
            }
            3 => {
                if let Some(turn) = pending.take() {
                    let outcome = if step % 2 == 0 { Ok(format!("reply {step}")) } else { Err(transport_failure()) };
                    conversation.complete(turn, outcome, "t");
                }
            }
            _ => {
                let _ = conversation.submit("   ", "t");
            }
        }

        let current = conversation.transcript();
        assert!(current.len() >= snapshot.len());
        assert_eq!(&current[..snapshot.len()], snapshot.as_slice());
        snapshot = current.to_vec();
    }
}
