//! Pile implementations.

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameConfig, GameError, GameRng, Hand, Result};

/// Copies of each rank in a standard deck.
const COPIES_PER_RANK: usize = 4;

/// The draw pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the standard composition, unshuffled.
    ///
    /// Four copies each of J, Q, K and 1 through 10. Fails with
    /// `DeckSizeMismatch` when that count differs from `config.total_cards`.
    pub fn standard(config: &GameConfig) -> Result<Self> {
        let mut cards = Vec::with_capacity(config.total_cards);
        for _ in 0..COPIES_PER_RANK {
            cards.push(Card::JACK);
            cards.push(Card::QUEEN);
            cards.push(Card::KING);
            cards.extend(Card::ranks().filter(|c| (1..=10).contains(&c.value())));
        }

        if cards.len() != config.total_cards {
            return Err(GameError::DeckSizeMismatch {
                expected: config.total_cards,
                actual: cards.len(),
            });
        }

        Ok(Self { cards })
    }

    /// Use a caller-arranged deck. The last card is drawn first.
    ///
    /// The cards must be a permutation of the standard composition.
    pub fn stacked(cards: Vec<Card>, config: &GameConfig) -> Result<Self> {
        let standard = Self::standard(config)?;
        if cards.len() != standard.len() {
            return Err(GameError::DeckSizeMismatch {
                expected: standard.len(),
                actual: cards.len(),
            });
        }

        let mut expected = standard.cards;
        let mut actual = cards.clone();
        expected.sort_unstable();
        actual.sort_unstable();
        if expected != actual {
            return Err(GameError::InvalidDeckComposition);
        }

        Ok(Self { cards })
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(GameError::DeckEmpty)
    }

    /// Draw `count` cards for a hand, in draw order.
    ///
    /// Fails without drawing anything if fewer than `count` cards remain.
    pub fn deal(&mut self, count: usize) -> Result<Hand> {
        if self.cards.len() < count {
            return Err(GameError::InsufficientCards {
                needed: count,
                available: self.cards.len(),
            });
        }
        let split = self.cards.len() - count;
        Ok(self.cards.drain(split..).rev().collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// The discard pile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(GameError::DiscardEmpty)
    }

    /// Look at the top card without taking it.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(value: u8) -> Card {
        Card::new(value).unwrap()
    }

    #[test]
    fn test_standard_composition() {
        let deck = Deck::standard(&GameConfig::default()).unwrap();
        assert_eq!(deck.len(), 52);

        for rank in Card::ranks() {
            let copies = deck.cards().iter().filter(|&&c| c == rank).count();
            assert_eq!(copies, 4, "rank {}", rank);
        }
    }

    #[test]
    fn test_standard_size_mismatch() {
        let config = GameConfig::default().with_total_cards(54);
        assert_eq!(
            Deck::standard(&config),
            Err(GameError::DeckSizeMismatch { expected: 54, actual: 52 })
        );
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::standard(&GameConfig::default()).unwrap();
        let top = *deck.cards().last().unwrap();

        assert_eq!(deck.draw().unwrap(), top);
        assert_eq!(deck.len(), 51);
    }

    #[test]
    fn test_draw_empty_deck() {
        let mut deck = Deck::default();
        assert_eq!(deck.draw(), Err(GameError::DeckEmpty));
    }

    #[test]
    fn test_deal_in_draw_order() {
        let mut deck = Deck::standard(&GameConfig::default()).unwrap();
        let expected: Vec<Card> = deck.cards().iter().rev().take(3).copied().collect();

        let hand = deck.deal(3).unwrap();
        assert_eq!(hand.as_slice(), expected.as_slice());
        assert_eq!(deck.len(), 49);
    }

    #[test]
    fn test_deal_insufficient() {
        let mut deck = Deck::standard(&GameConfig::default()).unwrap();
        while deck.len() > 2 {
            deck.draw().unwrap();
        }

        assert_eq!(
            deck.deal(3),
            Err(GameError::InsufficientCards { needed: 3, available: 2 })
        );
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_shuffle_keeps_composition() {
        let config = GameConfig::default();
        let standard = Deck::standard(&config).unwrap();
        let mut deck = standard.clone();
        deck.shuffle(&mut GameRng::new(42));

        assert_ne!(deck, standard);
        assert!(Deck::stacked(deck.cards().to_vec(), &config).is_ok());
    }

    #[test]
    fn test_stacked_rejects_wrong_cards() {
        let config = GameConfig::default();
        let mut cards = Deck::standard(&config).unwrap().cards().to_vec();

        cards[0] = Card::KING;
        assert_eq!(Deck::stacked(cards.clone(), &config), Err(GameError::InvalidDeckComposition));

        cards.pop();
        assert!(matches!(
            Deck::stacked(cards, &config),
            Err(GameError::DeckSizeMismatch { expected: 52, actual: 51 })
        ));
    }

    #[test]
    fn test_discard_pile_stack() {
        let mut pile = DiscardPile::new();
        assert_eq!(pile.draw(), Err(GameError::DiscardEmpty));
        assert_eq!(pile.top(), None);

        pile.push(card(5));
        pile.push(card(10));
        assert_eq!(pile.top(), Some(card(10)));

        assert_eq!(pile.draw().unwrap(), card(10));
        assert_eq!(pile.cards(), &[card(5)]);
        assert_eq!(pile.len(), 1);
    }
}
