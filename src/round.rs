//! The round controller.
//!
//! A round runs a fixed state machine: deal, player turn, house reveal,
//! house draws, resolution. The player may end the round early by reaching
//! 21 (immediate win) or going over (immediate loss); otherwise the house
//! draws to a fixed stand threshold and totals are compared.

use crate::console::Console;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::player::{HandVisibility, Player};

/// The total a hand is trying to reach without exceeding.
pub const TARGET_TOTAL: u8 = 21;

/// The house stops drawing at this total or above.
pub const HOUSE_STAND_TOTAL: u8 = 17;

/// Cards each side receives on the deal.
const DEAL_SIZE: usize = 2;

/// How one round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player won the round.
    PlayerWins,
    /// The house won the round.
    HouseWins,
    /// Both sides finished with the same total.
    Tie,
}

/// Runs a single round over a deck and two hands.
///
/// The round borrows the session's long-lived players and the per-round
/// deck; hands are expected to be empty on entry.
pub struct Round<'a, C: Console> {
    /// The human player.
    player: &'a mut Player,
    /// The house.
    house: &'a mut Player,
    /// The deck for this round.
    deck: &'a mut Deck,
    /// Presentation port.
    console: &'a mut C,
}

impl<'a, C: Console> Round<'a, C> {
    /// Creates a round controller.
    pub const fn new(
        player: &'a mut Player,
        house: &'a mut Player,
        deck: &'a mut Deck,
        console: &'a mut C,
    ) -> Self {
        Self {
            player,
            house,
            deck,
            console,
        }
    }

    /// Plays the round to completion.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Draw`] if the deck runs out of cards, and
    /// [`RoundError::InputClosed`] if the input stream closes mid-round.
    /// Either way the round is abandoned without an outcome.
    pub fn play(mut self) -> Result<Outcome, RoundError> {
        self.deal()?;

        if let Some(outcome) = self.player_turn()? {
            return Ok(outcome);
        }

        self.house_reveal();
        self.house_draw()?;
        Ok(self.resolve())
    }

    /// Deals two cards to each side. Only the house's up card is shown.
    fn deal(&mut self) -> Result<(), RoundError> {
        self.player.draw(self.deck, DEAL_SIZE)?;
        self.house.draw(self.deck, DEAL_SIZE)?;

        self.console
            .line(&self.player.view(HandVisibility::Full).to_string());
        self.console
            .line(&self.house.view(HandVisibility::UpCardOnly).to_string());
        Ok(())
    }

    /// Prompts hit/stay until the player stays, wins at 21, or busts.
    ///
    /// Returns `Some` when the round ends during the player's turn.
    fn player_turn(&mut self) -> Result<Option<Outcome>, RoundError> {
        loop {
            let choice = self
                .console
                .prompt("Hit or stay? (h/s): ")
                .ok_or(RoundError::InputClosed)?;

            match choice.chars().next() {
                Some('h' | 'H') => {
                    let drawn = self.player.draw(self.deck, 1)?;
                    let card = drawn[0];
                    self.console.line(&format!("You draw a {card}."));
                    self.console
                        .line(&self.player.view(HandVisibility::Full).to_string());

                    let total = self.player.total();
                    if total == TARGET_TOTAL {
                        self.console.line("Twenty-one!");
                        return Ok(Some(Outcome::PlayerWins));
                    }
                    if total > TARGET_TOTAL {
                        self.console.line("Bust!");
                        return Ok(Some(Outcome::HouseWins));
                    }
                }
                Some('s' | 'S') => return Ok(None),
                _ => self.console.line("Please answer 'h' or 's'."),
            }
        }
    }

    /// Shows the house's full hand, hole card included.
    fn house_reveal(&mut self) {
        self.console.line("The house reveals its hand.");
        self.console
            .line(&self.house.view(HandVisibility::Full).to_string());
    }

    /// House draws one card at a time until reaching the stand threshold.
    fn house_draw(&mut self) -> Result<(), RoundError> {
        while self.house.total() < HOUSE_STAND_TOTAL {
            self.console.pause();
            let drawn = self.house.draw(self.deck, 1)?;
            let card = drawn[0];
            self.console.line(&format!("The house draws a {card}."));
            self.console
                .line(&self.house.view(HandVisibility::Full).to_string());
        }
        Ok(())
    }

    /// Compares totals once both sides have finished drawing.
    fn resolve(&self) -> Outcome {
        let house_total = self.house.total();
        let player_total = self.player.total();

        if house_total > TARGET_TOTAL {
            Outcome::PlayerWins
        } else if house_total > player_total {
            Outcome::HouseWins
        } else if house_total == player_total {
            Outcome::Tie
        } else {
            Outcome::PlayerWins
        }
    }
}
