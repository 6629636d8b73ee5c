//! The per-hand session model.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::TableOptions;
use crate::player::Player;

use super::state::{Phase, RoundState};

/// Number of hole cards dealt to each player.
pub const HOLE_CARDS: usize = 2;

/// Everything that describes one hand in progress.
///
/// A session is a plain value. Betting transitions never mutate it in place;
/// [`Session::apply`] returns the next session, so a rejected action leaves
/// the previous one intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Undealt cards.
    pub deck: Deck,
    /// Seated players, indexed by id.
    pub players: Vec<Player>,
    /// Shared board cards.
    pub community_cards: Vec<Card>,
    /// Chips collected this hand.
    pub pot: usize,
    /// Id of the player to act.
    pub current_player: u8,
    /// Current phase.
    pub phase: Phase,
    /// Lifecycle state.
    pub round_state: RoundState,
    /// The table's standing bet on this street.
    pub current_bet: usize,
    /// Whether the pot of a finished hand was awarded.
    pub settled: bool,
}

impl Session {
    /// Deals a fresh hand from a newly shuffled deck.
    ///
    /// When `previous` holds one player per configured seat, those players
    /// keep their chips and records; otherwise fresh players are seated with
    /// the starting chips.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two seats are configured or the deck
    /// cannot cover the hole cards.
    pub fn deal<R: Rng + ?Sized>(
        options: &TableOptions,
        previous: &[Player],
        rng: &mut R,
    ) -> Result<Self, DealError> {
        Self::deal_from(options, previous, Deck::standard().shuffled(rng))
    }

    /// Deals a fresh hand from the given deck, in seat order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two seats are configured or the deck
    /// cannot cover the hole cards.
    pub fn deal_from(
        options: &TableOptions,
        previous: &[Player],
        mut deck: Deck,
    ) -> Result<Self, DealError> {
        if options.seats.len() < 2 {
            return Err(DealError::NotEnoughPlayers);
        }

        let mut players: Vec<Player> = if previous.len() == options.seats.len() {
            previous.to_vec()
        } else {
            options
                .seats
                .iter()
                .enumerate()
                .map(|(id, name)| Player::new(id as u8, name.clone(), options.starting_chips))
                .collect()
        };

        for player in &mut players {
            player.reset_for_hand();
            let (cards, rest) = deck.draw(HOLE_CARDS)?;
            player.hand = cards;
            deck = rest;
        }

        Ok(Self {
            deck,
            players,
            community_cards: Vec::new(),
            pot: 0,
            current_player: 0,
            phase: Phase::Preflop,
            round_state: RoundState::Playing,
            current_bet: 0,
            settled: false,
        })
    }

    /// Returns the player with the given id.
    #[must_use]
    pub fn player(&self, id: u8) -> Option<&Player> {
        self.players.get(usize::from(id))
    }

    /// Returns the player the current-player pointer refers to.
    #[must_use]
    pub fn acting_player(&self) -> Option<&Player> {
        self.player(self.current_player)
    }

    /// Returns the players who have not folded.
    pub fn unfolded(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| !player.has_folded)
    }

    /// Returns the next unfolded player after `seat`, wrapping around the
    /// table and ending on `seat` itself.
    pub(crate) fn next_unfolded_after(&self, seat: usize) -> Option<u8> {
        let count = self.players.len();
        (1..=count)
            .map(|step| (seat + step) % count)
            .filter_map(|index| self.players.get(index))
            .find(|player| !player.has_folded)
            .map(|player| player.id)
    }
}
