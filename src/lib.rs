//! A vingt-et-un (simplified blackjack) terminal card game.
//!
//! The crate provides a [`Session`] that runs the menu loop and plays
//! rounds against a fixed-policy house, over any [`Console`]
//! implementation.
//!
//! # Example
//!
//! ```no_run
//! use vingtun::{Session, StdConsole};
//!
//! let mut session = Session::new(StdConsole::new(), 42);
//! session.run();
//! ```

pub mod card;
pub mod console;
pub mod deck;
pub mod error;
pub mod player;
pub mod round;
pub mod session;

// Re-export main types
pub use card::{COPIES_PER_VALUE, Card, DECK_SIZE, MAX_VALUE};
pub use console::{Console, StdConsole};
pub use deck::Deck;
pub use error::{DrawError, RoundError};
pub use player::{HandVisibility, HandView, Player};
pub use round::{HOUSE_STAND_TOTAL, Outcome, Round, TARGET_TOTAL};
pub use session::Session;
