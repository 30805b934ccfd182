use serde::{Deserialize, Serialize};

/// The fixed set of UI triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Feed,
    Perform,
    Comfort,
    Rest,
}

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::Feed,
        ActionKind::Perform,
        ActionKind::Comfort,
        ActionKind::Rest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Feed => "feed",
            ActionKind::Perform => "perform",
            ActionKind::Comfort => "comfort",
            ActionKind::Rest => "rest",
        }
    }
}

/// Signed stat adjustment applied by an action. Kept as plain table data so
/// the sign and magnitude of each action stay configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDelta {
    pub hunger: i16,
    pub happiness: i16,
    pub energy: i16,
}

/// One entry of the action table: its delta, the status line shown
/// immediately, and the canned user utterance sent through the chat cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDefinition {
    pub kind: ActionKind,
    pub delta: StatDelta,
    pub announcement: String,
    pub follow_up_prompt: String,
}

/// The four-entry action table with the canonical deltas.
#[derive(Debug, Clone)]
pub struct ActionTable {
    definitions: Vec<ActionDefinition>,
}

impl Default for ActionTable {
    fn default() -> Self {
        Self {
            definitions: vec![
                ActionDefinition {
                    kind: ActionKind::Feed,
                    delta: StatDelta {
                        hunger: -20,
                        happiness: 5,
                        energy: 0,
                    },
                    announcement: "Snack time! Aria enjoys crackers, cheese, and fruit.".into(),
                    follow_up_prompt: "Aria, what is your favorite snack?".into(),
                },
                ActionDefinition {
                    kind: ActionKind::Perform,
                    delta: StatDelta {
                        hunger: 0,
                        happiness: 15,
                        energy: -10,
                    },
                    announcement: "Aria performs a little set just for you.".into(),
                    follow_up_prompt: "Aria, can you share the vibe of one of your favorite songs?"
                        .into(),
                },
                ActionDefinition {
                    kind: ActionKind::Comfort,
                    delta: StatDelta {
                        hunger: 0,
                        happiness: 10,
                        energy: 0,
                    },
                    announcement: "You gave Aria a hug. She feels calm and settled.".into(),
                    follow_up_prompt: "Aria, how do you feel after a hug?".into(),
                },
                ActionDefinition {
                    kind: ActionKind::Rest,
                    delta: StatDelta {
                        hunger: 5,
                        happiness: 0,
                        energy: 25,
                    },
                    announcement: "Aria is napping peacefully... shh.".into(),
                    follow_up_prompt: "Aria, do you like to nap? What helps you recharge?".into(),
                },
            ],
        }
    }
}

impl ActionTable {
    /// Build a table from custom definitions. Callers own the delta choices;
    /// the table only guarantees lookup by kind.
    pub fn from_definitions(definitions: Vec<ActionDefinition>) -> Self {
        Self { definitions }
    }

    pub fn get(&self, kind: ActionKind) -> Option<&ActionDefinition> {
        self.definitions.iter().find(|d| d.kind == kind)
    }

    pub fn definitions(&self) -> &[ActionDefinition] {
        &self.definitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_every_kind() {
        let table = ActionTable::default();
        for kind in ActionKind::ALL {
            assert!(table.get(kind).is_some(), "missing entry for {kind:?}");
        }
    }

    #[test]
    fn feed_lowers_hunger() {
        let table = ActionTable::default();
        let feed = table.get(ActionKind::Feed).unwrap();
        assert!(feed.delta.hunger < 0);
        assert!(feed.delta.happiness > 0);
    }

    #[test]
    fn custom_definitions_override_defaults() {
        let table = ActionTable::from_definitions(vec![ActionDefinition {
            kind: ActionKind::Feed,
            delta: StatDelta {
                hunger: 20,
                happiness: 0,
                energy: 0,
            },
            announcement: "fed".into(),
            follow_up_prompt: "prompt".into(),
        }]);
        assert_eq!(table.get(ActionKind::Feed).unwrap().delta.hunger, 20);
        assert!(table.get(ActionKind::Rest).is_none());
    }
}
