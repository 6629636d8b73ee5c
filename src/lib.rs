//! A Texas Hold'em betting engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that tracks the deck, players, pot and
//! betting round of a single hand, and advances it from pre-flop through the
//! flop, turn and river to showdown in response to fold, check, call and
//! raise actions. Hand evaluation is left to the caller.
//!
//! # Example
//!
//! ```
//! use holdem_rs::{ActionKind, Game, Phase, TableOptions};
//!
//! let mut game = Game::new(TableOptions::default(), 42);
//! game.start_new_game().unwrap();
//! game.perform_action(ActionKind::Raise, Some(50)).unwrap();
//! assert_eq!(game.pot(), 50);
//! assert_eq!(game.phase(), Phase::Preflop);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, ParseActionError, SettleError};
pub use game::{ActionKind, BettingView, Game, Phase, RoundState, Session};
pub use options::{Legality, Settlement, TableOptions};
pub use player::{HUMAN_SEAT, Player};
pub use result::{ActionOutcome, ActionReport, PotAward};
