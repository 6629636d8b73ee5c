//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{ActionError, DealError, SettleError};
use crate::options::TableOptions;
use crate::player::{HUMAN_SEAT, Player};
use crate::result::{ActionReport, PotAward};

mod actions;
mod query;
mod round;
pub mod session;
mod settle;
pub mod state;

pub use actions::ActionKind;
pub use query::BettingView;
pub use session::Session;
pub use state::{Phase, RoundState};

/// A Texas Hold'em betting engine for a single table.
///
/// The game owns the table options, a seeded random number generator and the
/// current [`Session`]. Every action is processed to completion against a
/// copy of the session, which replaces the current one only on success.
#[derive(Debug, Clone)]
pub struct Game {
    /// Table options.
    pub options: TableOptions,
    /// The current hand.
    session: Session,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game in the waiting state with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_rs::{Game, RoundState, TableOptions};
    ///
    /// let game = Game::new(TableOptions::default(), 42);
    /// assert_eq!(game.round_state(), RoundState::Waiting);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_session(options, Session::default(), seed)
    }

    /// Creates a game that continues from an existing session.
    #[must_use]
    pub fn with_session(options: TableOptions, session: Session, seed: u64) -> Self {
        Self {
            options,
            session,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles a fresh deck and deals a new hand.
    ///
    /// Players from the previous hand keep their chips and records.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two seats are configured or the deck
    /// cannot cover every seat's hole cards.
    pub fn start_new_game(&mut self) -> Result<(), DealError> {
        let session = Session::deal(&self.options, &self.session.players, &mut self.rng)?;
        log::info!("dealt a new hand to {} players", session.players.len());
        self.session = session;
        Ok(())
    }

    /// Clears the table back to the waiting state.
    pub fn reset_game(&mut self) {
        self.session = Session::default();
        log::info!("table reset");
    }

    /// Applies an action by the current player.
    ///
    /// See [`Session::apply`] for the betting rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is rejected; the session is unchanged.
    pub fn perform_action(
        &mut self,
        kind: ActionKind,
        amount: Option<usize>,
    ) -> Result<ActionReport, ActionError> {
        let (session, report) = self.session.apply(&self.options, kind, amount)?;
        self.session = session;
        Ok(report)
    }

    /// Awards the pot of a finished hand to the given player.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not finished, the pot was already
    /// awarded, or the winner is unknown or folded.
    pub fn award_pot(&mut self, winner: u8) -> Result<PotAward, SettleError> {
        let (session, award) = self.session.award_pot(winner)?;
        self.session = session;
        Ok(award)
    }

    /// Returns the current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the seated players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.session.players
    }

    /// Returns the player with the given id.
    #[must_use]
    pub fn player(&self, id: u8) -> Option<&Player> {
        self.session.player(id)
    }

    /// Returns the pot.
    #[must_use]
    pub const fn pot(&self) -> usize {
        self.session.pot
    }

    /// Returns the table's standing bet.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.session.current_bet
    }

    /// Returns the community cards.
    #[must_use]
    pub fn community_cards(&self) -> &[Card] {
        &self.session.community_cards
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.session.phase
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn round_state(&self) -> RoundState {
        self.session.round_state
    }

    /// Returns the id of the player to act.
    ///
    /// Returns `None` when no hand has been dealt.
    #[must_use]
    pub fn current_player(&self) -> Option<u8> {
        self.session
            .acting_player()
            .map(|player| player.id)
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.session.deck.len()
    }

    /// Returns whether the human seat is to act in a running hand.
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.session.round_state == RoundState::Playing
            && self.current_player() == Some(HUMAN_SEAT)
    }

    /// Returns whether the acting player may check.
    #[must_use]
    pub fn can_check(&self) -> bool {
        self.session.can_check()
    }

    /// Returns whether the acting player may call.
    #[must_use]
    pub fn can_call(&self) -> bool {
        self.session.can_call()
    }

    /// Returns whether the acting player may raise.
    #[must_use]
    pub fn can_raise(&self) -> bool {
        self.session.can_raise()
    }

    /// Smallest suggested raise target.
    #[must_use]
    pub const fn min_raise(&self) -> usize {
        self.session.min_raise(self.options.raise_increment)
    }

    /// Largest raise target the acting player can afford.
    #[must_use]
    pub fn max_raise(&self) -> usize {
        self.session.max_raise()
    }

    /// Returns every derived betting value for the acting player.
    #[must_use]
    pub fn betting_view(&self) -> BettingView {
        self.session.betting_view(self.options.raise_increment)
    }

    /// Clamps a requested raise target into `min_raise..=max_raise`.
    ///
    /// The lower bound wins when the player cannot afford the minimum.
    #[must_use]
    pub fn clamp_raise(&self, amount: usize) -> usize {
        amount.min(self.max_raise()).max(self.min_raise())
    }
}
