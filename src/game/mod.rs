//! Turn controller.
//!
//! `Game` is the only entry point callers drive. It owns the players, the
//! draw pile and the discard pile, sequences turns around eliminated seats,
//! and hands round endings to the `round` module for scoring.
//!
//! A turn is described by a `TurnRequest`:
//! - draw from the deck or the discard pile (or supply an already drawn card),
//! - optionally swap the card into a hand slot,
//! - optionally call stop.
//!
//! If the deck is empty when a turn begins, the request is ignored and the
//! round ends by card exhaustion.

mod controller;
mod turn;

pub use controller::{Game, GameBuilder};
pub use turn::{DrawSource, TurnRequest, TurnResult};
