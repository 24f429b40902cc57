//! Card types and deck constants.

use core::fmt;

/// A playing card identified only by its numeric value.
///
/// The game uses a suitless model: values run 1 through 10, with no face
/// cards. A value-1 card plays the role of an ace and may count as 11 when
/// totalling a hand (see [`crate::player::Player::total`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The value of the card (1..=10).
    pub value: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the value. Values outside 1..=10
    /// are accepted but never occur in a deck built by
    /// [`crate::deck::Deck::shuffled`].
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self { value }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Highest card value in the deck.
pub const MAX_VALUE: u8 = 10;

/// Copies of each value in a fresh deck.
pub const COPIES_PER_VALUE: usize = 4;

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = MAX_VALUE as usize * COPIES_PER_VALUE;
