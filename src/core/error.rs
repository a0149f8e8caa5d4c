//! Engine error type.
//!
//! Errors fall into three groups:
//! - configuration errors raised while building a game,
//! - exhaustion of the deck or discard pile,
//! - caller misuse (bad indices, eliminated players acting).
//!
//! Misuse is checked before any state is touched. Exhaustion reported from
//! inside a round reset may leave the round half-dealt.

use thiserror::Error;

use super::player::PlayerId;

/// Errors returned by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("player count must be between {min} and {max}, got {got}")]
    InvalidPlayerCount { got: usize, min: usize, max: usize },

    #[error("deck must have {expected} cards, but has {actual}")]
    DeckSizeMismatch { expected: usize, actual: usize },

    #[error("stacked deck is not a permutation of the standard deck")]
    InvalidDeckComposition,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("deck is empty, the round must end")]
    DeckEmpty,

    #[error("discard pile is empty")]
    DiscardEmpty,

    #[error("not enough cards to deal: need {needed}, deck has {available}")]
    InsufficientCards { needed: usize, available: usize },

    #[error("swap index {index} is out of range for a hand of {hand_size} cards")]
    InvalidSwapIndex { index: usize, hand_size: usize },

    #[error("invalid card value {0}")]
    InvalidCard(u8),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("{0} is eliminated")]
    PlayerEliminated(PlayerId),

    #[error("no active players remain")]
    NoActivePlayers,
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;
