use serde::{Deserialize, Serialize};

use crate::actions::StatDelta;

/// Bounded simulation stats for the companion.
///
/// Each stat lives in [0,100]; mutations clamp, they never wrap or reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionState {
    pub hunger: u8,
    pub happiness: u8,
    pub energy: u8,
}

impl Default for CompanionState {
    fn default() -> Self {
        Self {
            hunger: 70,
            happiness: 80,
            energy: 60,
        }
    }
}

impl CompanionState {
    /// Apply a delta, clamping every stat into [0,100].
    pub fn apply(&self, delta: &StatDelta) -> Self {
        Self {
            hunger: clamp_stat(self.hunger, delta.hunger),
            happiness: clamp_stat(self.happiness, delta.happiness),
            energy: clamp_stat(self.energy, delta.energy),
        }
    }

    /// Mood label derived from energy; not stored.
    pub fn mood(&self) -> Mood {
        match self.energy {
            80..=100 => Mood::Energized,
            50..=79 => Mood::Balanced,
            20..=49 => Mood::Tired,
            _ => Mood::Exhausted,
        }
    }
}

fn clamp_stat(value: u8, delta: i16) -> u8 {
    (value as i16 + delta).clamp(0, 100) as u8
}

/// Derived mood descriptor, mapped from energy via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Energized,
    Balanced,
    Tired,
    Exhausted,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energized => "energized",
            Mood::Balanced => "balanced",
            Mood::Tired => "tired",
            Mood::Exhausted => "exhausted",
        }
    }
}

/// Whether the companion accepts free-form input right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanionMode {
    #[default]
    Awake,
    Resting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_clamps_at_upper_bound() {
        let state = CompanionState {
            hunger: 70,
            happiness: 80,
            energy: 95,
        };
        let next = state.apply(&StatDelta {
            hunger: 0,
            happiness: 0,
            energy: 25,
        });
        assert_eq!(next.energy, 100);
    }

    #[test]
    fn apply_clamps_at_lower_bound() {
        let state = CompanionState {
            hunger: 10,
            happiness: 80,
            energy: 60,
        };
        let next = state.apply(&StatDelta {
            hunger: -20,
            happiness: 0,
            energy: 0,
        });
        assert_eq!(next.hunger, 0);
    }

    #[test]
    fn apply_leaves_untouched_stats_alone() {
        let state = CompanionState::default();
        let next = state.apply(&StatDelta {
            hunger: 0,
            happiness: 10,
            energy: 0,
        });
        assert_eq!(next.hunger, state.hunger);
        assert_eq!(next.energy, state.energy);
        assert_eq!(next.happiness, 90);
    }

    #[test]
    fn mood_thresholds() {
        let mut state = CompanionState::default();
        state.energy = 100;
        assert_eq!(state.mood(), Mood::Energized);
        state.energy = 80;
        assert_eq!(state.mood(), Mood::Energized);
        state.energy = 79;
        assert_eq!(state.mood(), Mood::Balanced);
        state.energy = 50;
        assert_eq!(state.mood(), Mood::Balanced);
        state.energy = 49;
        assert_eq!(state.mood(), Mood::Tired);
        state.energy = 20;
        assert_eq!(state.mood(), Mood::Tired);
        state.energy = 19;
        assert_eq!(state.mood(), Mood::Exhausted);
        state.energy = 0;
        assert_eq!(state.mood(), Mood::Exhausted);
    }
}
