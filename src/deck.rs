//! Deck construction, shuffling and drawing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// An ordered sequence of cards, consumed from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full 52-card deck in enumeration order:
    /// spades 2..A, hearts 2..A, diamonds 2..A, clubs 2..A.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Creates a deck with the given cards, the first card being the next one dealt.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns a uniformly shuffled copy of this deck, leaving `self` untouched.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Draws the first `count` cards.
    ///
    /// Returns the drawn cards together with the remaining deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::DeckExhausted`] if fewer than `count` cards remain.
    pub fn draw(&self, count: usize) -> Result<(Vec<Card>, Self), DealError> {
        if count > self.cards.len() {
            return Err(DealError::DeckExhausted {
                requested: count,
                remaining: self.cards.len(),
            });
        }

        let (drawn, rest) = self.cards.split_at(count);
        Ok((drawn.to_vec(), Self::from_cards(rest.to_vec())))
    }

    /// Returns the cards left in the deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
