//! The menu and session loop.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::console::Console;
use crate::deck::Deck;
use crate::error::RoundError;
use crate::player::Player;
use crate::round::{Outcome, Round};

/// Static rules text shown by the menu.
const RULES: &str = "\
Vingt-et-un rules:
  - Cards are valued 1 to 10; there are four of each value in the deck.
  - A 1 counts as 11 whenever that does not take your total past 21.
  - You and the house are dealt two cards; one house card stays hidden.
  - Hit to draw more cards, stay to stop. Going over 21 loses at once;
    hitting exactly 21 wins at once.
  - After you stay, the house reveals its hand and draws until it
    reaches 17 or more. Highest total at or under 21 wins.";

/// A game session: one human player against the house, round after round.
///
/// The session owns the long-lived players and the random generator; a
/// fresh deck is created on every pass through the menu. Nothing is
/// tallied across rounds.
pub struct Session<C: Console> {
    /// Presentation port.
    pub console: C,
    /// The human player. Renamed once the session starts.
    player: Player,
    /// The house.
    house: Player,
    /// Random number generator for shuffles.
    rng: ChaCha8Rng,
}

impl<C: Console> Session<C> {
    /// Creates a session with the given console and shuffle seed.
    #[must_use]
    pub fn new(console: C, seed: u64) -> Self {
        Self {
            console,
            player: Player::new("Player"),
            house: Player::new("House"),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Runs the session until the player quits or input closes.
    pub fn run(&mut self) {
        self.console.line("Welcome to Vingt-et-un.");

        let Some(name) = self.console.prompt("What is your name? ") else {
            return;
        };
        self.player = Player::new(name);

        loop {
            self.player.reset();
            self.house.reset();
            let mut deck = Deck::shuffled(&mut self.rng);

            self.console.line("");
            self.console
                .line(&format!("{}, choose an option:", self.player.name()));
            self.console.line("  1) Show the rules");
            self.console.line("  2) Play a round");
            self.console.line("  3) Quit");

            let Some(choice) = self.console.prompt("> ") else {
                return;
            };

            match choice.as_str() {
                "1" => self.console.line(RULES),
                "2" => {
                    if deck.is_empty() {
                        deck = Deck::shuffled(&mut self.rng);
                    }
                    self.console.clear();
                    match self.play_round(&mut deck) {
                        Ok(outcome) => self.narrate(outcome),
                        Err(RoundError::Draw(_)) => {
                            self.console
                                .line("The deck ran out of cards; round abandoned.");
                        }
                        Err(RoundError::InputClosed) => return,
                    }
                }
                "3" => {
                    self.console.line("Thanks for playing. Goodbye!");
                    return;
                }
                _ => self.console.line("Invalid choice, enter 1, 2 or 3."),
            }
        }
    }

    /// Plays one round with the session's players.
    fn play_round(&mut self, deck: &mut Deck) -> Result<Outcome, RoundError> {
        Round::new(&mut self.player, &mut self.house, deck, &mut self.console).play()
    }

    /// Announces the round outcome. Nothing is recorded.
    fn narrate(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => {
                self.console
                    .line(&format!("{} wins the round!", self.player.name()));
            }
            Outcome::HouseWins => self.console.line("The house wins the round."),
            Outcome::Tie => self.console.line("The round is a tie."),
        }
    }
}
