//! Table configuration options.

use alloc::string::String;
use alloc::vec::Vec;

/// How strictly the action processor treats actions the betting view marks
/// as unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Legality {
    /// Availability is a hint for the caller. An illegal check is performed as
    /// a no-op, and an unaffordable call or raise is ignored while the turn
    /// still passes to the next player.
    #[default]
    Advisory,
    /// Unavailable actions are rejected with an error and leave the hand
    /// untouched.
    Enforced,
}

/// When a betting round counts as settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Settlement {
    /// Checked after every action: the street ends as soon as all unfolded
    /// players have matched the table bet, even if some have not acted yet.
    #[default]
    EveryAction,
    /// Additionally requires every unfolded player to have acted since the
    /// street began or since the last raise.
    FullRotation,
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use holdem_rs::{Legality, TableOptions};
///
/// let options = TableOptions::default()
///     .with_starting_chips(500)
///     .with_raise_increment(20)
///     .with_legality(Legality::Enforced);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Seat names; the seat id is the index in this list.
    pub seats: Vec<String>,
    /// Chips each player starts with when first seated.
    pub starting_chips: usize,
    /// Minimum raise step over the table bet.
    pub raise_increment: usize,
    /// Legality enforcement of the action processor.
    pub legality: Legality,
    /// Betting round settlement rule.
    pub settlement: Settlement,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            seats: ["You", "Alice", "Bob", "Charlie"]
                .into_iter()
                .map(String::from)
                .collect(),
            starting_chips: 1000,
            raise_increment: 10,
            legality: Legality::Advisory,
            settlement: Settlement::EveryAction,
        }
    }
}

impl TableOptions {
    /// Sets the seat names.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_rs::TableOptions;
    ///
    /// let options = TableOptions::default().with_seats(["You", "Dana"]);
    /// assert_eq!(options.seats.len(), 2);
    /// ```
    #[must_use]
    pub fn with_seats<I, S>(mut self, seats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seats = seats.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the chips each player starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_rs::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(250);
    /// assert_eq!(options.starting_chips, 250);
    /// ```
    #[must_use]
    pub fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the minimum raise step.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_rs::TableOptions;
    ///
    /// let options = TableOptions::default().with_raise_increment(25);
    /// assert_eq!(options.raise_increment, 25);
    /// ```
    #[must_use]
    pub fn with_raise_increment(mut self, increment: usize) -> Self {
        self.raise_increment = increment;
        self
    }

    /// Sets how strictly action availability is enforced.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_rs::{Legality, TableOptions};
    ///
    /// let options = TableOptions::default().with_legality(Legality::Enforced);
    /// assert_eq!(options.legality, Legality::Enforced);
    /// ```
    #[must_use]
    pub fn with_legality(mut self, legality: Legality) -> Self {
        self.legality = legality;
        self
    }

    /// Sets the betting round settlement rule.
    ///
    /// # Example
    ///
    /// ```
    /// use holdem_rs::{Settlement, TableOptions};
    ///
    /// let options = TableOptions::default().with_settlement(Settlement::FullRotation);
    /// assert_eq!(options.settlement, Settlement::FullRotation);
    /// ```
    #[must_use]
    pub fn with_settlement(mut self, settlement: Settlement) -> Self {
        self.settlement = settlement;
        self
    }
}
