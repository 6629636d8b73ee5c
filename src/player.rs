//! Seated players.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Seat controlled by the human at the keyboard.
pub const HUMAN_SEAT: u8 = 0;

/// A player seated at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Stable seat id, equal to the seat index.
    pub id: u8,
    /// Display name.
    pub name: String,
    /// Chips behind.
    pub chips: usize,
    /// Chips put in during the current street.
    pub current_bet: usize,
    /// Chips put in the pot during the whole hand.
    pub committed: usize,
    /// Whether the seat takes part in the current hand.
    pub is_active: bool,
    /// Whether the player folded this hand.
    pub has_folded: bool,
    /// Whether the player acted since the street began or the last raise.
    pub has_acted: bool,
    /// Hole cards (empty before the deal).
    pub hand: Vec<Card>,
    /// Hands won at this table.
    pub hands_won: u32,
    /// Hands lost at this table.
    pub hands_lost: u32,
}

impl Player {
    /// Seats a new player with the given chips and an empty record.
    #[must_use]
    pub fn new(id: u8, name: impl Into<String>, chips: usize) -> Self {
        Self {
            id,
            name: name.into(),
            chips,
            current_bet: 0,
            committed: 0,
            is_active: true,
            has_folded: false,
            has_acted: false,
            hand: Vec::new(),
            hands_won: 0,
            hands_lost: 0,
        }
    }

    /// Returns whether this is the human-controlled seat.
    #[must_use]
    pub const fn is_human(&self) -> bool {
        self.id == HUMAN_SEAT
    }

    /// Clears per-hand fields, keeping chips and the won/lost record.
    pub fn reset_for_hand(&mut self) {
        self.current_bet = 0;
        self.committed = 0;
        self.is_active = true;
        self.has_folded = false;
        self.has_acted = false;
        self.hand.clear();
    }

    /// Moves `amount` chips from the stack into the current bet.
    ///
    /// Callers must have checked that the stack covers `amount`.
    pub(crate) const fn commit(&mut self, amount: usize) {
        self.chips -= amount;
        self.current_bet += amount;
        self.committed += amount;
    }
}
