//! # three-card-stop
//!
//! Rules engine for a three-card elimination game in the family of Golf
//! and 31.
//!
//! ## Rules in brief
//!
//! - 2 to 4 players each hold three cards. Jack = 0, Ace = 1, 2-10 face
//!   value, Queen = 11, King = 12. Low is good.
//! - A player knows their first two cards; the third stays hidden until
//!   they swap a card into that slot.
//! - On a turn the player draws from the deck or the discard pile, may swap
//!   the drawn card into their hand, and may call **stop**.
//! - A stopper with the strictly lowest hand scores nothing and everyone
//!   else scores their hand. Otherwise the stopper scores the whole table.
//! - If the deck runs out, everyone scores their own hand.
//! - Reaching the elimination threshold knocks a player out. The last player
//!   standing wins.
//!
//! ## Architecture
//!
//! - **Single writer**: `Game` owns every hand and knowledge mask; players
//!   expose reads only.
//! - **Pure scoring**: round scoring is computed over a player slice and
//!   applied afterwards, so it can be tested in isolation.
//! - **Observers, not output**: resolution emits `RoundEvent`s; rendering
//!   them is the caller's job.
//! - **Deterministic**: games are seeded; `GameBuilder::stacked_deck` fixes
//!   the first deal exactly.
//!
//! ## Modules
//!
//! - `core`: Cards, players, configuration, errors, RNG
//! - `deck`: Draw pile and discard pile
//! - `round`: Scoring, eliminations and round events
//! - `game`: Turn controller
//!
//! ## Example
//!
//! ```
//! use three_card_stop::{Game, TurnRequest};
//!
//! let mut game = Game::with_seed(3, 7).unwrap();
//! let first = game.current_player().id();
//!
//! game.play_turn(TurnRequest::from_deck().with_swap(2)).unwrap();
//!
//! assert_eq!(game.player(first).unwrap().known_cards(), &[true, true, true]);
//! assert_eq!(game.discard_len(), 1);
//! ```

pub mod core;
pub mod deck;
pub mod game;
pub mod round;

// Re-export commonly used types
pub use crate::core::{Card, GameConfig, GameError, GameRng, Hand, Player, PlayerId, Result};

pub use crate::deck::{Deck, DiscardPile};

pub use crate::round::{
    RecordingObserver, RoundEnd, RoundEvent, RoundObserver, RoundOutcome, RoundScoring, ScoreDelta,
    StopVerdict,
};

pub use crate::game::{DrawSource, Game, GameBuilder, TurnRequest, TurnResult};
