//! Conversation history manager.
//!
//! An ordered, append-only log of turns, except that the trailing assistant
//! turn is updated in place while a response streams. The system turn is
//! rebuilt per request and never stored here.

use aria_companion::CompanionMode;
use aria_core::{ChatTurn, Role};
use tracing::trace;

#[derive(Debug, Default)]
pub struct ConversationHistory {
    turns: Vec<ChatTurn>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a free-form user turn.
    ///
    /// Silently rejects blank input and input submitted while the companion
    /// is resting; returns whether a turn was appended.
    pub fn append_user(&mut self, text: &str, mode: CompanionMode) -> bool {
        if text.trim().is_empty() || mode == CompanionMode::Resting {
            trace!(?mode, "rejected user input");
            return false;
        }
        self.turns.push(ChatTurn::user(text));
        true
    }

    /// Append an action's canned follow-up utterance as a user turn.
    /// Dispatch has already woken the companion, so no mode gate applies.
    pub fn append_follow_up(&mut self, prompt: &str) {
        self.turns.push(ChatTurn::user(prompt));
    }

    /// Fold the sanitized text of the in-flight response into the history.
    ///
    /// If the trailing turn is an assistant turn its content is replaced in
    /// place (same position, same id); otherwise a new streaming assistant
    /// turn is appended. One response therefore always occupies exactly one
    /// entry, however many fragments arrived.
    pub fn fold_assistant_chunk(&mut self, sanitized: &str) {
        match self.turns.last_mut() {
            Some(last) if last.role == Role::Assistant => {
                last.content = sanitized.to_string();
            }
            _ => {
                let mut turn = ChatTurn::assistant(sanitized);
                turn.streaming = true;
                self.turns.push(turn);
            }
        }
    }

    /// Mark the trailing assistant turn as complete (end-of-stream).
    pub fn finalize_assistant_turn(&mut self) {
        if let Some(last) = self.turns.last_mut() {
            if last.role == Role::Assistant {
                last.streaming = false;
            }
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }
}
