//! Round events and observers.
//!
//! The engine never prints. It reports what happened during resolution as a
//! sequence of `RoundEvent`s, delivered to each registered `RoundObserver`
//! in emission order:
//!
//! 1. `HandRevealed` for every active player
//! 2. `DeckExhausted`, or `StopCalled` followed by `StopperWon`/`StopperLost`
//! 3. `PointsAwarded` for every active player
//! 4. `PlayerEliminated` for each new elimination
//! 5. `RoundReset` once the next round is dealt
//! 6. `GameOver` if at most one player remains

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::scoring::{RoundEnd, ScoreDelta, StopVerdict};
use crate::core::{Hand, PlayerId};

/// Something that happened while resolving a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// An active player's hand was turned face up.
    HandRevealed { player: PlayerId, cards: Hand, sum: u32 },
    /// The round ended because the draw pile ran out.
    DeckExhausted,
    /// The round ended on a stop call.
    StopCalled { stopper: PlayerId, sum: u32 },
    /// The stopper had the strictly lowest hand.
    StopperWon { stopper: PlayerId },
    /// Someone tied or beat the stopper.
    StopperLost { stopper: PlayerId, penalty: u32 },
    /// Points added to a player (possibly zero).
    PointsAwarded { player: PlayerId, delta: u32, total: u32 },
    /// A player crossed the elimination threshold.
    PlayerEliminated { player: PlayerId, points: u32 },
    /// A fresh deck was shuffled and dealt.
    RoundReset { round: u32, dealt_players: usize, deck_remaining: usize },
    /// One or zero active players remain.
    GameOver { winner: Option<PlayerId> },
}

/// Receives round events from the game.
pub trait RoundObserver {
    fn on_event(&mut self, event: &RoundEvent);
}

/// Observer that records every event it sees.
///
/// Clones share the same log, so a caller can keep one handle and give the
/// game another.
///
/// ```
/// use three_card_stop::round::{RecordingObserver, RoundEvent, RoundObserver};
///
/// let recorder = RecordingObserver::new();
/// let mut handle = recorder.clone();
/// handle.on_event(&RoundEvent::DeckExhausted);
/// assert_eq!(recorder.events(), vec![RoundEvent::DeckExhausted]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<RoundEvent>>>,
}

impl RecordingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<RoundEvent> {
        self.events.borrow().clone()
    }

    /// Take recorded events, leaving the log empty.
    pub fn drain(&self) -> Vec<RoundEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl RoundObserver for RecordingObserver {
    fn on_event(&mut self, event: &RoundEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Summary of a resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// 1-based round number.
    pub round: u32,
    pub end: RoundEnd,
    pub verdict: Option<StopVerdict>,
    /// One entry per player active during the round.
    pub deltas: Vec<ScoreDelta>,
    /// Players eliminated at the end of this round.
    pub eliminated: Vec<PlayerId>,
}

impl RoundOutcome {
    /// Points `player` gained this round.
    #[must_use]
    pub fn points_for(&self, player: PlayerId) -> u32 {
        self.deltas
            .iter()
            .find(|d| d.player == player)
            .map_or(0, |d| d.points)
    }
}
