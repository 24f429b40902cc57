//! The per-round deck.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{COPIES_PER_VALUE, Card, DECK_SIZE, MAX_VALUE};
use crate::error::DrawError;

/// A deck of cards, consumed from the top as the round progresses.
///
/// A fresh deck holds [`COPIES_PER_VALUE`] copies of each value 1..=10
/// ([`DECK_SIZE`] cards in total) in a random permutation. Draws pop cards
/// from the end of the internal sequence, so no card is ever dealt twice.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, last element dealt next.
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck shuffled with the given generator.
    #[must_use]
    pub fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for value in 1..=MAX_VALUE {
            for _ in 0..COPIES_PER_VALUE {
                cards.push(Card::new(value));
            }
        }
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck with a fixed card order.
    ///
    /// The last element of `cards` is dealt first. Useful for scripting
    /// exact deals in tests.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Removes and returns the next `n` cards.
    ///
    /// The deck is left untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NotEnoughCards`] if fewer than `n` cards remain.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, DrawError> {
        if n > self.cards.len() {
            return Err(DrawError::NotEnoughCards);
        }
        Ok(self.cards.split_off(self.cards.len() - n))
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
