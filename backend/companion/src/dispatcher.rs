//! Maps UI triggers to stat mutations and follow-up prompts.

use tracing::debug;

use crate::actions::{ActionKind, ActionTable};
use crate::state::{CompanionMode, CompanionState};

/// Result of dispatching one action: the new state and mode, plus the
/// status line and canned user utterance to feed into the chat cycle.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    pub state: CompanionState,
    pub mode: CompanionMode,
    /// True when the action interrupted a nap.
    pub woke: bool,
    pub announcement: String,
    pub follow_up_prompt: String,
}

/// Translates a trigger into a stat delta, an announcement, and a follow-up
/// user turn. Pure over its inputs; callers commit the outcome.
pub struct ActionDispatcher {
    table: ActionTable,
}

impl ActionDispatcher {
    pub fn new(table: ActionTable) -> Self {
        Self { table }
    }

    /// Apply `kind` to the current state and mode.
    ///
    /// A non-rest action while resting wakes the companion before its own
    /// delta is applied; the rest action puts her to sleep.
    pub fn dispatch(
        &self,
        kind: ActionKind,
        state: CompanionState,
        mode: CompanionMode,
    ) -> Option<DispatchOutcome> {
        let definition = self.table.get(kind)?;

        let woke = mode == CompanionMode::Resting && kind != ActionKind::Rest;
        let next_mode = if kind == ActionKind::Rest {
            CompanionMode::Resting
        } else {
            CompanionMode::Awake
        };

        let next_state = state.apply(&definition.delta);
        debug!(action = kind.as_str(), woke, ?next_state, "dispatched action");

        Some(DispatchOutcome {
            state: next_state,
            mode: next_mode,
            woke,
            announcement: definition.announcement.clone(),
            follow_up_prompt: definition.follow_up_prompt.clone(),
        })
    }
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new(ActionTable::default())
    }
}
