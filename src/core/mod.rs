//! Core engine types: cards, players, configuration, errors, RNG.
//!
//! Everything here is independent of turn sequencing. The `game` module
//! composes these into the round/turn state machine.

pub mod card;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use card::Card;
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use player::{Hand, KnownMask, Player, PlayerId};
pub use rng::GameRng;
