//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Not enough cards remain in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that abort a round in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The deck ran out of cards mid-round.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// The input stream closed while waiting for a choice.
    #[error("input stream closed")]
    InputClosed,
}
