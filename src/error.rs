//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer than two seats are configured.
    #[error("at least two players are required to deal a hand")]
    NotEnoughPlayers,
    /// Not enough cards left in the deck.
    #[error("deck exhausted: {requested} cards requested, {remaining} remaining")]
    DeckExhausted {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards that were left.
        remaining: usize,
    },
}

/// Errors that can occur while processing a betting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No hand has been dealt.
    #[error("no hand is in progress")]
    HandNotInProgress,
    /// The hand has already reached showdown or every player folded.
    #[error("the hand is finished")]
    HandFinished,
    /// No unfolded player is left to act.
    #[error("no player is able to act")]
    NoActingPlayer,
    /// Checking requires having matched the table bet.
    #[error("cannot check while facing a bet")]
    CannotCheck,
    /// A raise was requested without a target amount.
    #[error("raise amount is missing")]
    MissingRaiseAmount,
    /// The raise target does not exceed the current bet or the minimum raise.
    #[error("raise amount is too small")]
    RaiseTooSmall,
    /// The player cannot cover the call or raise.
    #[error("insufficient chips for this action")]
    InsufficientChips,
    /// Advancing to the next street failed to deal.
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Errors that can occur while awarding the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// The hand has not reached its end yet.
    #[error("the hand is not finished")]
    HandNotFinished,
    /// The pot of this hand was already awarded.
    #[error("the pot was already awarded")]
    AlreadySettled,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// A folded player cannot win the pot.
    #[error("player has folded")]
    PlayerFolded,
}

/// Error returned when parsing an unknown action name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown action; expected fold, check, call or raise")]
pub struct ParseActionError;
