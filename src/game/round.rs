use crate::error::DealError;
use crate::options::Settlement;

use super::{Phase, RoundState, Session};

impl Session {
    /// Checks whether the current betting round is settled.
    ///
    /// Every unfolded player must have matched the table bet. Under
    /// [`Settlement::FullRotation`] each of them must also have acted since
    /// the street began or the last raise.
    #[must_use]
    pub fn is_round_settled(&self, settlement: Settlement) -> bool {
        self.unfolded().all(|player| {
            player.current_bet == self.current_bet
                && (settlement == Settlement::EveryAction || player.has_acted)
        })
    }

    /// Moves the hand to the next phase, dealing its community cards.
    ///
    /// Leaving the river finishes the hand without dealing.
    pub(crate) fn advance_phase(&mut self) -> Result<Phase, DealError> {
        let Some(next) = self.phase.next() else {
            self.round_state = RoundState::Finished;
            return Ok(self.phase);
        };

        let count = next.community_cards() - self.phase.community_cards();
        if count > 0 {
            let (cards, rest) = self.deck.draw(count)?;
            self.community_cards.extend(cards);
            self.deck = rest;
        }
        self.phase = next;

        if next == Phase::Showdown {
            self.round_state = RoundState::Finished;
            log::info!("showdown reached with {} in the pot", self.pot);
        } else {
            self.start_street();
            log::info!(
                "dealt the {next}, board has {} cards",
                self.community_cards.len()
            );
        }

        Ok(next)
    }

    fn start_street(&mut self) {
        self.current_bet = 0;
        for player in &mut self.players {
            player.current_bet = 0;
            player.has_acted = false;
        }
    }
}
