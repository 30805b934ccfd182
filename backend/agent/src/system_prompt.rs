//! System-prompt builder.
//!
//! Combines the fixed persona ruleset with the live companion stats so the
//! backend always reasons from the current state, never a stale snapshot.

use aria_companion::{CompanionState, persona::PERSONA_RULES};
use aria_core::ChatTurn;

pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the system turn for one outbound request. Recomputed fresh on
    /// every request; never cached; carries no conversation history.
    pub fn build(state: &CompanionState) -> ChatTurn {
        let content = format!(
            "{PERSONA_RULES}\n\n## Current stats\nHunger: {}\nHappiness: {}\nEnergy: {}\nMood: {}",
            state.hunger,
            state.happiness,
            state.energy,
            state.mood().as_str(),
        );
        ChatTurn::system(content)
    }
}
