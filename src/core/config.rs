//! Game balance configuration.
//!
//! `GameConfig::default()` carries the authoritative values. Callers may
//! tune them for variants or tests with the `with_*` setters; the game
//! builder validates the result before dealing.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error::{GameError, Result};

/// Fewest players a game may seat.
pub const MIN_PLAYERS: usize = 2;
/// Most players a game may seat.
pub const MAX_PLAYERS: usize = 4;
/// Cards in a freshly built deck.
pub const TOTAL_CARDS: usize = 52;
/// Cards dealt to each active player per round.
pub const CARDS_PER_PLAYER: usize = 3;
/// Points at which a player is eliminated.
pub const ELIMINATION_POINTS: u32 = 50;
/// Known hand sum at or below which stopping is a strong play.
pub const STOP_SUM_LOW: u32 = 4;
/// Known hand sum at or below which stopping is a reasonable gamble.
pub const STOP_SUM_MEDIUM: u32 = 8;
/// Card value at or below which swapping into a hidden slot pays off.
pub const LOW_CARD_THRESHOLD: u8 = 3;

/// Complete game configuration.
///
/// The stop and low-card thresholds are heuristics for external strategies;
/// the rules engine itself never reads them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fewest players allowed (inclusive).
    pub min_players: usize,

    /// Most players allowed (inclusive).
    pub max_players: usize,

    /// Expected size of a freshly built deck.
    pub total_cards: usize,

    /// Cards dealt to each active player.
    pub cards_per_player: usize,

    /// Cumulative points that eliminate a player.
    pub elimination_points: u32,

    /// Strong-stop threshold for a fully known hand.
    pub stop_sum_low: u32,

    /// Gamble-stop threshold for a fully known hand.
    pub stop_sum_medium: u32,

    /// Highest card worth swapping into a hidden slot.
    pub low_card_threshold: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            total_cards: TOTAL_CARDS,
            cards_per_player: CARDS_PER_PLAYER,
            elimination_points: ELIMINATION_POINTS,
            stop_sum_low: STOP_SUM_LOW,
            stop_sum_medium: STOP_SUM_MEDIUM,
            low_card_threshold: LOW_CARD_THRESHOLD,
        }
    }
}

impl GameConfig {
    /// Set the inclusive player count range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the expected deck size.
    #[must_use]
    pub fn with_total_cards(mut self, total: usize) -> Self {
        self.total_cards = total;
        self
    }

    /// Set the elimination threshold.
    #[must_use]
    pub fn with_elimination_points(mut self, points: u32) -> Self {
        self.elimination_points = points;
        self
    }

    /// Set the stop heuristics.
    #[must_use]
    pub fn with_stop_sums(mut self, low: u32, medium: u32) -> Self {
        self.stop_sum_low = low;
        self.stop_sum_medium = medium;
        self
    }

    /// Set the low-card swap heuristic.
    #[must_use]
    pub fn with_low_card_threshold(mut self, threshold: u8) -> Self {
        self.low_card_threshold = threshold;
        self
    }

    /// Check that `count` is within the allowed player range.
    pub fn check_player_count(&self, count: usize) -> Result<()> {
        if count < self.min_players || count > self.max_players {
            return Err(GameError::InvalidPlayerCount {
                got: count,
                min: self.min_players,
                max: self.max_players,
            });
        }
        Ok(())
    }

    /// Check the balance rules between knobs.
    pub fn validate(&self) -> Result<()> {
        if self.min_players < 2 {
            return Err(invalid("a game needs at least 2 players"));
        }
        if self.max_players < self.min_players {
            return Err(invalid("max_players is below min_players"));
        }
        if self.cards_per_player == 0 {
            return Err(invalid("players must be dealt at least one card"));
        }
        if self.max_players * self.cards_per_player >= self.total_cards {
            return Err(invalid("a full table would leave no cards to draw"));
        }
        if self.elimination_points == 0 {
            return Err(invalid("elimination_points must be positive"));
        }
        if self.stop_sum_low >= self.stop_sum_medium {
            return Err(invalid("stop_sum_low must be below stop_sum_medium"));
        }
        if u32::from(self.low_card_threshold) * 2 > Card::KING.points() {
            return Err(invalid("low_card_threshold is above half a King"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> GameError {
    GameError::InvalidConfig(reason.to_string())
}
