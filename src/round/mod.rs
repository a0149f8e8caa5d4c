//! Round resolution: scoring, eliminations and the events they produce.
//!
//! A round ends one of two ways, captured by `RoundEnd`:
//!
//! - **Cards exhausted**: the draw pile was empty when a turn began. Every
//!   active player adds their own hand sum.
//! - **Stopped**: a player bet their hand is the strict lowest. If any other
//!   active player ties or beats it, the stopper takes the whole table's sum;
//!   otherwise everyone but the stopper adds their own sum.
//!
//! Scoring is computed by pure functions over the player list, then applied
//! by the game controller. Each step is reported as a `RoundEvent` so that
//! presentation stays outside the engine.

mod events;
mod scoring;

pub use events::{RecordingObserver, RoundEvent, RoundObserver, RoundOutcome};
pub use scoring::{apply_scores, check_eliminations, score_round, RoundEnd, RoundScoring, ScoreDelta, StopVerdict};
