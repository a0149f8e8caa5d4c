//! Round scoring rules.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Player, PlayerId, Result};

/// Why a round ended. The two causes are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEnd {
    /// The draw pile was empty at the start of a turn.
    CardsExhausted,
    /// A player called stop.
    Stopped { stopper: PlayerId },
}

impl RoundEnd {
    /// The stopper, if the round ended by a stop call.
    #[must_use]
    pub fn stopper(self) -> Option<PlayerId> {
        match self {
            RoundEnd::Stopped { stopper } => Some(stopper),
            RoundEnd::CardsExhausted => None,
        }
    }
}

/// How a stop call turned out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopVerdict {
    /// Strictly lowest hand: the stopper scores nothing.
    Won,
    /// Someone tied or went lower: the stopper takes `penalty`.
    Lost { penalty: u32 },
}

/// Points one active player receives for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub player: PlayerId,
    /// Hand sum revealed at resolution.
    pub hand_sum: u32,
    /// Points added this round (may be 0).
    pub points: u32,
}

/// Result of scoring a round, before it is applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScoring {
    pub end: RoundEnd,
    /// Present only for stopped rounds.
    pub verdict: Option<StopVerdict>,
    /// One entry per active player, in seating order.
    pub deltas: Vec<ScoreDelta>,
}

impl RoundScoring {
    /// Points awarded to `player`, 0 if they were not scored.
    #[must_use]
    pub fn points_for(&self, player: PlayerId) -> u32 {
        self.deltas
            .iter()
            .find(|d| d.player == player)
            .map_or(0, |d| d.points)
    }
}

/// Score a round without mutating anyone.
///
/// Eliminated players are skipped entirely. Fails with `UnknownPlayer` if
/// the stopper is not seated.
pub fn score_round(players: &[Player], end: RoundEnd) -> Result<RoundScoring> {
    let active: Vec<&Player> = players.iter().filter(|p| p.is_active()).collect();

    let (verdict, deltas) = match end {
        RoundEnd::CardsExhausted => {
            let deltas = active
                .iter()
                .map(|p| ScoreDelta { player: p.id(), hand_sum: p.sum(), points: p.sum() })
                .collect();
            (None, deltas)
        }
        RoundEnd::Stopped { stopper } => {
            let stopper_sum = players
                .iter()
                .find(|p| p.id() == stopper)
                .ok_or(GameError::UnknownPlayer(stopper))?
                .sum();

            // Ties go against the stopper.
            let challenged = active
                .iter()
                .any(|p| p.id() != stopper && p.sum() <= stopper_sum);

            if challenged {
                let penalty: u32 = active.iter().map(|p| p.sum()).sum();
                let deltas = active
                    .iter()
                    .map(|p| ScoreDelta {
                        player: p.id(),
                        hand_sum: p.sum(),
                        points: if p.id() == stopper { penalty } else { 0 },
                    })
                    .collect();
                (Some(StopVerdict::Lost { penalty }), deltas)
            } else {
                let deltas = active
                    .iter()
                    .map(|p| ScoreDelta {
                        player: p.id(),
                        hand_sum: p.sum(),
                        points: if p.id() == stopper { 0 } else { p.sum() },
                    })
                    .collect();
                (Some(StopVerdict::Won), deltas)
            }
        }
    };

    Ok(RoundScoring { end, verdict, deltas })
}

/// Add each delta to its player's points.
pub fn apply_scores(players: &mut [Player], scoring: &RoundScoring) {
    for delta in &scoring.deltas {
        if let Some(player) = players.iter_mut().find(|p| p.id() == delta.player) {
            player.add_points(delta.points);
        }
    }
}

/// Eliminate every active player at or above `threshold`.
///
/// Returns the players eliminated by this call. Elimination is one-way.
pub fn check_eliminations(players: &mut [Player], threshold: u32) -> Vec<PlayerId> {
    players
        .iter_mut()
        .filter(|p| p.is_active() && p.points() >= threshold)
        .map(|p| {
            p.eliminate();
            p.id()
        })
        .collect()
}
