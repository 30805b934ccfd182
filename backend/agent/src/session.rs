//! Chat session: the single sequential request/stream cycle.
//!
//! One pipeline, no parallelism: await the next fragment, sanitize the
//! accumulated raw text, fold the result into the trailing assistant turn,
//! repeat until end-of-stream. At most one cycle is in flight at a time and
//! submission is gated while one is.

use std::sync::Arc;

use futures::StreamExt;
use tracing::{debug, info, warn};

use aria_companion::{ActionDispatcher, ActionKind, CompanionStore};
use aria_core::{AriaError, StreamRelay};

use crate::history::ConversationHistory;
use crate::sanitizer::ResponseSanitizer;
use crate::system_prompt::PromptBuilder;

pub struct ChatSession {
    relay: Arc<dyn StreamRelay>,
    store: CompanionStore,
    dispatcher: ActionDispatcher,
    sanitizer: ResponseSanitizer,
    history: ConversationHistory,
    in_flight: bool,
}

impl ChatSession {
    pub fn new(relay: Arc<dyn StreamRelay>) -> Self {
        Self {
            relay,
            store: CompanionStore::default(),
            dispatcher: ActionDispatcher::default(),
            sanitizer: ResponseSanitizer::default(),
            history: ConversationHistory::new(),
            in_flight: false,
        }
    }

    pub fn with_dispatcher(relay: Arc<dyn StreamRelay>, dispatcher: ActionDispatcher) -> Self {
        Self {
            dispatcher,
            ..Self::new(relay)
        }
    }

    pub fn store(&self) -> &CompanionStore {
        &self.store
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Content of the companion's most recent reply, if any.
    pub fn last_reply(&self) -> Option<&str> {
        self.history
            .turns()
            .iter()
            .rev()
            .find(|t| t.role == aria_core::Role::Assistant)
            .map(|t| t.content.as_str())
    }

    /// Submit free-form user input.
    ///
    /// Returns `Ok(false)` without issuing a request when a cycle is already
    /// in flight, the companion is resting, or the input is blank.
    pub async fn submit(&mut self, text: &str) -> Result<bool, AriaError> {
        if self.in_flight {
            debug!("submission ignored: response in flight");
            return Ok(false);
        }
        let mode = self.store.snapshot().mode;
        if !self.history.append_user(text, mode) {
            return Ok(false);
        }
        self.run_cycle().await?;
        Ok(true)
    }

    /// Trigger one of the fixed actions: mutate stats, update the status
    /// line, append the follow-up user turn, and run a chat cycle.
    pub async fn perform_action(&mut self, kind: ActionKind) -> Result<bool, AriaError> {
        if self.in_flight {
            debug!("action ignored: response in flight");
            return Ok(false);
        }
        let snapshot = self.store.snapshot();
        let Some(outcome) = self.dispatcher.dispatch(kind, snapshot.state, snapshot.mode) else {
            return Ok(false);
        };
        if outcome.woke {
            info!(action = kind.as_str(), "companion wakes up");
        }
        self.store.update(|snap| {
            snap.state = outcome.state;
            snap.mode = outcome.mode;
            snap.status = outcome.announcement.clone();
        });
        self.history.append_follow_up(&outcome.follow_up_prompt);
        self.run_cycle().await?;
        Ok(true)
    }

    async fn run_cycle(&mut self) -> Result<(), AriaError> {
        self.in_flight = true;
        let result = self.consume_response().await;
        // Whatever was folded so far is accepted as final, success or not.
        self.history.finalize_assistant_turn();
        self.in_flight = false;
        if let Err(err) = &result {
            warn!(error = %err, "request cycle failed");
        }
        result
    }

    async fn consume_response(&mut self) -> Result<(), AriaError> {
        let system = PromptBuilder::build(&self.store.snapshot().state);
        let mut outbound = Vec::with_capacity(self.history.len() + 1);
        outbound.push(system);
        outbound.extend_from_slice(self.history.turns());

        let mut stream = self.relay.stream_chat(&outbound).await?;

        let mut raw = String::new();
        while let Some(fragment) = stream.next().await {
            let fragment = fragment?;
            raw.push_str(&fragment);
            self.history
                .fold_assistant_chunk(&self.sanitizer.sanitize(&raw));
        }
        // An empty or fully-hidden response still gets its (empty) entry.
        self.history
            .fold_assistant_chunk(&self.sanitizer.sanitize(&raw));
        Ok(())
    }
}
