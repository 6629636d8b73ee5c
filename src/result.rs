//! Outcome types reported by the engine.

use crate::error::ActionError;
use crate::game::{ActionKind, Phase};

/// What happened to a submitted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action was applied; `chips` is the amount moved into the pot.
    Applied {
        /// Chips moved from the player to the pot.
        chips: usize,
    },
    /// The action was accepted but had no effect (advisory legality only).
    Ignored(ActionError),
}

/// Report of a single processed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionReport {
    /// The player who acted.
    pub player_id: u8,
    /// The requested action.
    pub kind: ActionKind,
    /// The raise target, if one was given.
    pub amount: Option<usize>,
    /// Whether the action took effect.
    pub outcome: ActionOutcome,
    /// The player to act next, or `None` when nobody is left.
    pub next_player: Option<u8>,
    /// The phase entered because the round settled, if any.
    pub advanced_to: Option<Phase>,
}

impl ActionReport {
    /// Returns whether the action took effect.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self.outcome, ActionOutcome::Applied { .. })
    }
}

/// Result of awarding the pot at the end of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotAward {
    /// The winning player.
    pub winner: u8,
    /// Chips moved from the pot to the winner.
    pub amount: usize,
}
