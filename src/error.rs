//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when dealing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The undealt pool is empty. A full pool outlasts any single round, so
    /// reaching this means the deck was never shuffled or was loaded short.
    #[error("no cards left in the undealt pool")]
    Exhausted,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewRoundError {
    /// A round is already being played out.
    #[error("a round is already in progress")]
    RoundInProgress,
    /// The opening deal ran out of cards.
    #[error("no cards left in the undealt pool")]
    OutOfCards,
}

impl From<DeckError> for NewRoundError {
    fn from(_: DeckError) -> Self {
        Self::OutOfCards
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is being played.
    #[error("no round is in progress")]
    NoActiveRound,
    /// The undealt pool ran out mid-action.
    #[error("no cards left in the undealt pool")]
    OutOfCards,
}

impl From<DeckError> for ActionError {
    fn from(_: DeckError) -> Self {
        Self::OutOfCards
    }
}
