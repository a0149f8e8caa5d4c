//! Player identity and per-player round state.
//!
//! ## PlayerId
//!
//! Stable 1-based identifier assigned at game creation and never reused.
//!
//! ## Player
//!
//! A player's hand, the mask of slots they have seen, cumulative points
//! and elimination flag. Reads are public; every write goes through the
//! game controller (`pub(crate)` mutators), which keeps a single writer
//! for hands and knowledge masks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use super::error::{GameError, Result};

/// Cards held by a player. Exactly three once dealt, empty between rounds.
pub type Hand = SmallVec<[Card; 3]>;

/// Parallel visibility mask for a `Hand`.
pub type KnownMask = SmallVec<[bool; 3]>;

/// Player identifier, 1-based in seating order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Seat index (0-based) of this player.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// Player ID seated at a 0-based index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u8 + 1)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use three_card_stop::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count).map(PlayerId::from_index)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
///
/// `points` only ever grows and `eliminated` never flips back to false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    cards: Hand,
    known_cards: KnownMask,
    points: u32,
    eliminated: bool,
}

impl Player {
    /// Create a player with an empty hand and no points.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            cards: Hand::new(),
            known_cards: KnownMask::new(),
            points: 0,
            eliminated: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Cards in hand, in slot order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Visibility mask, parallel to `cards()`.
    #[must_use]
    pub fn known_cards(&self) -> &[bool] {
        &self.known_cards
    }

    /// Cumulative points across rounds.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }

    /// Total of every card in hand. An empty hand sums to 0.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.cards.iter().map(|c| c.points()).sum()
    }

    /// Total of the cards this player has seen.
    #[must_use]
    pub fn known_sum(&self) -> u32 {
        self.known_card_values().iter().map(|c| c.points()).sum()
    }

    /// Values at known slots, in slot order.
    #[must_use]
    pub fn known_card_values(&self) -> Hand {
        self.cards
            .iter()
            .zip(self.known_cards.iter())
            .filter(|(_, &known)| known)
            .map(|(&card, _)| card)
            .collect()
    }

    /// True when every slot of a dealt hand is known.
    #[must_use]
    pub fn is_fully_known(&self) -> bool {
        !self.cards.is_empty() && self.known_cards.iter().all(|&k| k)
    }

    /// First slot the player has not seen yet.
    #[must_use]
    pub fn unknown_index(&self) -> Option<usize> {
        self.known_cards.iter().position(|&k| !k)
    }

    /// Hand as its owner sees it, e.g. `[5, K, ?]`.
    #[must_use]
    pub fn visible_hand(&self) -> String {
        let slots: Vec<String> = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, &card)| {
                let known = self.known_cards.get(i).copied().unwrap_or(false);
                Card::symbol_or_unknown(known.then_some(card))
            })
            .collect();
        format!("[{}]", slots.join(", "))
    }

    /// Replace the hand with freshly dealt cards.
    ///
    /// The first two slots are known, every later slot is hidden.
    pub(crate) fn deal(&mut self, cards: Hand) {
        self.known_cards = (0..cards.len()).map(|i| i < 2).collect();
        self.cards = cards;
    }

    pub(crate) fn clear_hand(&mut self) {
        self.cards.clear();
        self.known_cards.clear();
    }

    /// Put `card` into slot `index` and return the card it replaced.
    ///
    /// The slot becomes known: the player just placed that card.
    pub(crate) fn swap(&mut self, index: usize, card: Card) -> Result<Card> {
        let hand_size = self.cards.len();
        let slot = self
            .cards
            .get_mut(index)
            .ok_or(GameError::InvalidSwapIndex { index, hand_size })?;
        let old = std::mem::replace(slot, card);
        self.known_cards[index] = true;
        Ok(old)
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    pub(crate) fn eliminate(&mut self) {
        self.eliminated = true;
    }

    #[cfg(test)]
    pub(crate) fn set_hand(&mut self, values: &[u8]) {
        self.cards = values.iter().map(|&v| Card::new(v).unwrap()).collect();
        self.known_cards = (0..values.len()).map(|i| i < 2).collect();
    }

    #[cfg(test)]
    pub(crate) fn set_known(&mut self, mask: &[bool]) {
        self.known_cards = mask.iter().copied().collect();
    }
}
