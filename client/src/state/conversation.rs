//! Conversation state for the floating assistant widget.
//!
//! DESIGN
//! ======
//! The widget tracks four concerns: panel visibility, the in-flight turn, the
//! last failure notice, and whether suggestions are still offered. Pending and
//! failure are folded into one [`Activity`] so "pending with an error" cannot
//! be represented. Visibility stays a separate axis because a turn that is in
//! flight when the panel closes must still resolve into the transcript.
//!
//! Every transition is a plain method on [`Conversation`], so the whole state
//! machine is exercised headlessly; the component only wires signals, DOM side
//! effects, and the network call around it.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::net::assistant::{AssistantError, FALLBACK_REPLY};

/// User-facing notice shown after any failed turn.
pub const FAILURE_NOTICE: &str = "Unable to connect to AI assistant. Please try again later.";

/// Canned questions offered before the first send, in display order.
pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "What services do you offer?",
    "What are your rates?",
    "Are you available for new projects?",
    "How can I contact you?",
    "What types of projects do you work on?",
];

/// Transcript-unique message identifier, increasing in append order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

impl MessageId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Identifies one outbound request so its completion can be matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TurnId(u64);

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    /// Local time-of-day label captured when the entry was appended.
    pub timestamp: String,
}

/// Whether the panel is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Request lifecycle of the conversation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Activity {
    /// Ready to accept a submission.
    #[default]
    Idle,
    /// Exactly one request is in flight.
    Awaiting { turn: TurnId },
    /// The last turn failed; submissions are still accepted.
    Failed { notice: String },
}

/// A turn that has been recorded and must now be sent to the endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundTurn {
    pub turn: TurnId,
    /// Trimmed user text, identical to the stored user message.
    pub prompt: String,
}

/// Why a submission was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("message is empty")]
    Empty,
    #[error("a reply is still pending")]
    Busy,
    #[error("panel is closed")]
    Closed,
    #[error("suggestions are no longer offered")]
    SuggestionsHidden,
}

/// What a completion did to the conversation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnResolution {
    /// An assistant message was appended.
    Replied(MessageId),
    /// The failure notice was recorded; nothing was appended.
    Failed,
    /// The completion did not match the awaited turn and was ignored.
    Stale,
}

/// Aggregate widget state. Created once per mount, never persisted.
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    transcript: Vec<Message>,
    visibility: Visibility,
    activity: Activity,
    has_sent: bool,
    next_message_id: u64,
    next_turn_id: u64,
}

impl Conversation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in append order.
    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    #[must_use]
    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.activity, Activity::Awaiting { .. })
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        match &self.activity {
            Activity::Failed { notice } => Some(notice),
            _ => None,
        }
    }

    /// Latched off by the first accepted submission.
    #[must_use]
    pub fn suggestions_visible(&self) -> bool {
        !self.has_sent
    }

    /// Whether the send affordances should be enabled for `draft`.
    #[must_use]
    pub fn can_send(&self, draft: &str) -> bool {
        self.is_open() && !self.is_pending() && !draft.trim().is_empty()
    }

    /// Flip the panel and return the new visibility.
    pub fn toggle_visibility(&mut self) -> Visibility {
        self.visibility = match self.visibility {
            Visibility::Closed => Visibility::Open,
            Visibility::Open => Visibility::Closed,
        };
        self.visibility
    }

    /// Returns `true` when the panel was closed before.
    pub fn open(&mut self) -> bool {
        let changed = self.visibility == Visibility::Closed;
        self.visibility = Visibility::Open;
        changed
    }

    /// Returns `true` when the panel was open before. In-flight turns keep
    /// running and resolve into the transcript while closed.
    pub fn close(&mut self) -> bool {
        let changed = self.visibility == Visibility::Open;
        self.visibility = Visibility::Closed;
        changed
    }

    /// Record a user turn and hand back the request to dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected`] when the trimmed text is empty, the panel is
    /// closed, or a reply is still pending. Rejections leave state untouched.
    pub fn submit(&mut self, text: &str, timestamp: impl Into<String>) -> Result<OutboundTurn, SubmitRejected> {
        let prompt = text.trim();
        if prompt.is_empty() {
            return Err(SubmitRejected::Empty);
        }
        if !self.is_open() {
            return Err(SubmitRejected::Closed);
        }
        if self.is_pending() {
            return Err(SubmitRejected::Busy);
        }

        self.push_message(prompt.to_owned(), Sender::User, timestamp.into());
        let turn = TurnId(self.next_turn_id);
        self.next_turn_id += 1;
        self.activity = Activity::Awaiting { turn };
        self.has_sent = true;

        Ok(OutboundTurn { turn, prompt: prompt.to_owned() })
    }

    /// Submit one of the canned questions.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::SuggestionsHidden`] once the first message has
    /// been sent, otherwise the same errors as [`Conversation::submit`].
    pub fn select_suggestion(
        &mut self,
        question: &str,
        timestamp: impl Into<String>,
    ) -> Result<OutboundTurn, SubmitRejected> {
        if !self.suggestions_visible() {
            return Err(SubmitRejected::SuggestionsHidden);
        }
        self.submit(question, timestamp)
    }

    /// Apply the outcome of the request started for `turn`.
    pub fn complete(
        &mut self,
        turn: TurnId,
        outcome: Result<String, AssistantError>,
        timestamp: impl Into<String>,
    ) -> TurnResolution {
        if self.activity != (Activity::Awaiting { turn }) {
            return TurnResolution::Stale;
        }

        match outcome {
            Ok(reply) => {
                // `reply_text` already resolves blank replies; this guards
                // callers that hand in text from elsewhere.
                let text = match reply.trim() {
                    "" => FALLBACK_REPLY.to_owned(),
                    trimmed => trimmed.to_owned(),
                };
                self.activity = Activity::Idle;
                TurnResolution::Replied(self.push_message(text, Sender::Assistant, timestamp.into()))
            }
            Err(_) => {
                self.activity = Activity::Failed { notice: FAILURE_NOTICE.to_owned() };
                TurnResolution::Failed
            }
        }
    }

    fn push_message(&mut self, text: String, sender: Sender, timestamp: String) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        self.transcript.push(Message { id, text, sender, timestamp });
        id
    }
}
