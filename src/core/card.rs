//! Card values.
//!
//! Cards carry a single rank value with no suit:
//!
//! | rank  | value |
//! |-------|-------|
//! | Jack  | 0     |
//! | Ace   | 1     |
//! | 2-10  | face  |
//! | Queen | 11    |
//! | King  | 12    |
//!
//! The Jack is the best card to hold, the King the worst.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// A single card. Immutable value type ordered by rank value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Jack, the lowest card (0 points).
    pub const JACK: Card = Card(0);
    /// Ace (1 point).
    pub const ACE: Card = Card(1);
    /// Queen (11 points).
    pub const QUEEN: Card = Card(11);
    /// King, the highest card (12 points).
    pub const KING: Card = Card(12);

    /// Highest valid rank value.
    pub const MAX_VALUE: u8 = 12;

    /// Create a card from its rank value.
    ///
    /// Fails with `InvalidCard` for values above 12.
    pub fn new(value: u8) -> Result<Self> {
        if value > Self::MAX_VALUE {
            return Err(GameError::InvalidCard(value));
        }
        Ok(Self(value))
    }

    /// Raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Points this card adds to a hand sum.
    #[must_use]
    pub const fn points(self) -> u32 {
        self.0 as u32
    }

    /// Iterate over every rank, Jack through King.
    pub fn ranks() -> impl Iterator<Item = Card> {
        (0..=Self::MAX_VALUE).map(Card)
    }

    /// Display symbol: `J`, `A`, `2`..`10`, `Q`, `K`.
    #[must_use]
    pub fn symbol(self) -> String {
        match self.0 {
            0 => "J".to_string(),
            1 => "A".to_string(),
            11 => "Q".to_string(),
            12 => "K".to_string(),
            n => n.to_string(),
        }
    }

    /// Symbol for a slot that may not hold a card. Empty slots render `?`.
    #[must_use]
    pub fn symbol_or_unknown(card: Option<Card>) -> String {
        card.map_or_else(|| "?".to_string(), Card::symbol)
    }
}

impl TryFrom<u8> for Card {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Card::new(value)
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Card::JACK.symbol(), "J");
        assert_eq!(Card::ACE.symbol(), "A");
        assert_eq!(Card::new(2).unwrap().symbol(), "2");
        assert_eq!(Card::new(5).unwrap().symbol(), "5");
        assert_eq!(Card::new(10).unwrap().symbol(), "10");
        assert_eq!(Card::QUEEN.symbol(), "Q");
        assert_eq!(Card::KING.symbol(), "K");
        assert_eq!(format!("{}", Card::KING), "K");
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(Card::symbol_or_unknown(None), "?");
        assert_eq!(Card::symbol_or_unknown(Some(Card::QUEEN)), "Q");
    }

    #[test]
    fn test_invalid_value() {
        assert_eq!(Card::new(13), Err(GameError::InvalidCard(13)));
        assert!(Card::try_from(12u8).is_ok());
    }

    #[test]
    fn test_ordering_follows_points() {
        assert!(Card::JACK < Card::ACE);
        assert!(Card::new(10).unwrap() < Card::QUEEN);
        assert!(Card::QUEEN < Card::KING);
        assert_eq!(Card::KING.points(), 12);
    }

    #[test]
    fn test_ranks() {
        let ranks: Vec<_> = Card::ranks().map(Card::value).collect();
        assert_eq!(ranks, (0..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn test_serde_as_plain_number() {
        let json = serde_json::to_string(&Card::QUEEN).unwrap();
        assert_eq!(json, "11");

        let card: Card = serde_json::from_str("7").unwrap();
        assert_eq!(card.value(), 7);

        assert!(serde_json::from_str::<Card>("13").is_err());
    }
}
