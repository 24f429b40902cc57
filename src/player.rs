//! Player and house hand state.

use core::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DrawError;

/// A participant in the game, either the human player or the house.
///
/// A player owns a name for the whole session and a hand that grows by
/// drawing and is cleared between rounds.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name, fixed for the session.
    name: String,
    /// Cards drawn this round, in draw order.
    hand: Vec<Card>,
}

impl Player {
    /// Creates a new player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand, in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.hand
    }

    /// Draws `n` cards from the deck and appends them to the hand.
    ///
    /// Returns the newly drawn cards.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::NotEnoughCards`] if the deck cannot supply `n`
    /// cards; the hand is left unchanged.
    pub fn draw(&mut self, deck: &mut Deck, n: usize) -> Result<&[Card], DrawError> {
        let start = self.hand.len();
        self.hand.extend(deck.draw(n)?);
        Ok(&self.hand[start..])
    }

    /// Calculates the best total for the hand.
    ///
    /// Base total is the sum of card values. Then, while the total is at
    /// most 11 and unspent 1-valued cards remain, each such card is upgraded
    /// from 1 to 11 (adding 10). Every 1-valued card is a candidate, each
    /// usable once; the loop stops as soon as the total exceeds 11.
    #[must_use]
    pub fn total(&self) -> u8 {
        let mut total: u8 = self
            .hand
            .iter()
            .fold(0, |sum: u8, card| sum.saturating_add(card.value));
        let mut aces = self.hand.iter().filter(|card| card.value == 1).count();

        while total <= 11 && aces > 0 {
            total += 10;
            aces -= 1;
        }

        total
    }

    /// Empties the hand for a new round.
    pub fn reset(&mut self) {
        self.hand.clear();
    }

    /// Returns a displayable view of the hand.
    ///
    /// [`HandVisibility::UpCardOnly`] masks every card past the first and
    /// omits the total, keeping the house's hole card out of any output
    /// until the reveal phase.
    #[must_use]
    pub const fn view(&self, visibility: HandVisibility) -> HandView<'_> {
        HandView {
            player: self,
            visibility,
        }
    }
}

/// How much of a hand a [`HandView`] exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandVisibility {
    /// Only the first card; the rest are masked and no total is shown.
    UpCardOnly,
    /// Every card plus the computed total.
    Full,
}

/// A display adapter for a player's hand.
#[derive(Debug, Clone, Copy)]
pub struct HandView<'a> {
    /// The player whose hand is shown.
    player: &'a Player,
    /// How much of the hand is exposed.
    visibility: HandVisibility,
}

impl fmt::Display for HandView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.player.name)?;

        match self.visibility {
            HandVisibility::Full => {
                for card in self.player.cards() {
                    write!(f, " {card}")?;
                }
                write!(f, " (total {})", self.player.total())
            }
            HandVisibility::UpCardOnly => {
                if let Some(card) = self.player.cards().first() {
                    write!(f, " {card}")?;
                }
                for _ in self.player.cards().iter().skip(1) {
                    write!(f, " ??")?;
                }
                Ok(())
            }
        }
    }
}
