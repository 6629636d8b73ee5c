use core::fmt;
use core::str::FromStr;

use crate::error::{ActionError, ParseActionError};
use crate::options::{Legality, TableOptions};
use crate::result::{ActionOutcome, ActionReport};

use super::{RoundState, Session};

/// A betting action a player can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Give up the hand.
    Fold,
    /// Pass without betting.
    Check,
    /// Match the table bet.
    Call,
    /// Raise the table bet to a target total.
    Raise,
}

impl ActionKind {
    /// Returns the lowercase action name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fold => "fold",
            Self::Check => "check",
            Self::Call => "call",
            Self::Raise => "raise",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fold" | "f" => Ok(Self::Fold),
            "check" | "x" => Ok(Self::Check),
            "call" | "c" => Ok(Self::Call),
            "raise" | "r" => Ok(Self::Raise),
            _ => Err(ParseActionError),
        }
    }
}

impl Session {
    /// Applies an action by the current player and returns the next session.
    ///
    /// `amount` is the raise target: the acting player's total bet on this
    /// street after the raise, not the increment. It is ignored for other
    /// actions. A zero amount counts as missing.
    ///
    /// After the action the turn passes to the next unfolded player and the
    /// round settlement check runs; a settled round deals the next street.
    /// Under [`Legality::Advisory`] an unaffordable call or raise is reported
    /// as [`ActionOutcome::Ignored`] and the turn still passes.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand is in progress, the hand is finished, the
    /// current player cannot act, the next street cannot be dealt, or (under
    /// [`Legality::Enforced`]) the action is not available to the player.
    pub fn apply(
        &self,
        options: &TableOptions,
        kind: ActionKind,
        amount: Option<usize>,
    ) -> Result<(Self, ActionReport), ActionError> {
        match self.round_state {
            RoundState::Waiting => return Err(ActionError::HandNotInProgress),
            RoundState::Finished => return Err(ActionError::HandFinished),
            RoundState::Playing => {}
        }

        let seat = usize::from(self.current_player);
        if !self.players.get(seat).is_some_and(|player| !player.has_folded) {
            return Err(ActionError::NoActingPlayer);
        }

        let mut next = self.clone();
        let outcome = match next.execute(options, seat, kind, amount) {
            Ok(chips) => {
                log::debug!(
                    "player {} {kind} moved {chips} chips (pot {})",
                    self.current_player,
                    next.pot
                );
                ActionOutcome::Applied { chips }
            }
            Err(reason) if options.legality == Legality::Advisory => {
                log::warn!(
                    "player {} {kind} ignored: {reason}",
                    self.current_player
                );
                ActionOutcome::Ignored(reason)
            }
            Err(reason) => return Err(reason),
        };
        next.players[seat].has_acted = true;

        let next_player = next.next_unfolded_after(seat);
        let advanced_to = match next_player {
            Some(id) => {
                next.current_player = id;
                if next.is_round_settled(options.settlement) {
                    Some(next.advance_phase()?)
                } else {
                    None
                }
            }
            None => {
                log::info!("every player folded, hand finished");
                next.round_state = RoundState::Finished;
                None
            }
        };

        let report = ActionReport {
            player_id: self.current_player,
            kind,
            amount,
            outcome,
            next_player,
            advanced_to,
        };

        Ok((next, report))
    }

    /// Performs the chip movement of one action for the player at `seat`.
    ///
    /// Returns the chips moved to the pot. Leaves `self` untouched on error.
    fn execute(
        &mut self,
        options: &TableOptions,
        seat: usize,
        kind: ActionKind,
        amount: Option<usize>,
    ) -> Result<usize, ActionError> {
        match kind {
            ActionKind::Fold => {
                self.players[seat].has_folded = true;
                Ok(0)
            }
            ActionKind::Check => {
                if options.legality == Legality::Enforced && !self.can_check() {
                    return Err(ActionError::CannotCheck);
                }
                Ok(0)
            }
            ActionKind::Call => {
                let call_amount = self.call_amount();
                if self.players[seat].chips < call_amount {
                    return Err(ActionError::InsufficientChips);
                }

                self.players[seat].commit(call_amount);
                self.pot += call_amount;
                Ok(call_amount)
            }
            ActionKind::Raise => {
                let target = amount
                    .filter(|&target| target > 0)
                    .ok_or(ActionError::MissingRaiseAmount)?;
                let player = &self.players[seat];

                if target <= self.current_bet || target <= player.current_bet {
                    return Err(ActionError::RaiseTooSmall);
                }
                if options.legality == Legality::Enforced
                    && target < self.min_raise(options.raise_increment)
                {
                    return Err(ActionError::RaiseTooSmall);
                }
                // Compared against the whole stack, not the increment.
                if player.chips < target {
                    return Err(ActionError::InsufficientChips);
                }

                let delta = target - player.current_bet;
                self.players[seat].commit(delta);
                self.current_bet = target;
                self.pot += delta;

                for (index, other) in self.players.iter_mut().enumerate() {
                    if index != seat {
                        other.has_acted = false;
                    }
                }

                Ok(delta)
            }
        }
    }
}
