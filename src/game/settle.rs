use crate::error::SettleError;
use crate::result::PotAward;

use super::{RoundState, Session};

impl Session {
    /// Awards the pot of a finished hand to `winner`.
    ///
    /// The engine does not evaluate hands; the caller names the winner. The
    /// winner's record gains a win and every other seat a loss.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not finished, the pot was already
    /// awarded, or the winner is unknown or folded.
    pub fn award_pot(&self, winner: u8) -> Result<(Self, PotAward), SettleError> {
        if self.round_state != RoundState::Finished {
            return Err(SettleError::HandNotFinished);
        }
        if self.settled {
            return Err(SettleError::AlreadySettled);
        }

        let player = self.player(winner).ok_or(SettleError::PlayerNotFound)?;
        if player.has_folded {
            return Err(SettleError::PlayerFolded);
        }

        let mut next = self.clone();
        let amount = next.pot;
        next.pot = 0;
        next.settled = true;

        for player in &mut next.players {
            if player.id == winner {
                player.chips += amount;
                player.hands_won += 1;
            } else {
                player.hands_lost += 1;
            }
        }

        log::info!("player {winner} wins {amount}");

        Ok((next, PotAward { winner, amount }))
    }
}
