//! Turn requests and results.

use serde::{Deserialize, Serialize};

use crate::core::{Card, PlayerId};
use crate::round::RoundOutcome;

/// Pile a turn draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawSource {
    Deck,
    Discard,
}

/// What the current player does on their turn.
///
/// ## Precedence
///
/// `drawn_card` is checked first. When set, that card is used as the drawn
/// card and neither pile is touched; `take_from` is then informational.
/// This supports callers that draw with `Game::draw_from_deck`, inspect the
/// card, and only then decide where to put it.
///
/// ```
/// use three_card_stop::game::{DrawSource, TurnRequest};
///
/// let request = TurnRequest::from_deck().with_swap(2).with_stop();
/// assert_eq!(request.take_from, DrawSource::Deck);
/// assert_eq!(request.swap_index, Some(2));
/// assert!(request.stop);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRequest {
    pub take_from: DrawSource,
    /// Hand slot to replace. `None` discards the drawn card.
    pub swap_index: Option<usize>,
    /// End the round after placing the card.
    pub stop: bool,
    /// A card already drawn by the caller.
    pub drawn_card: Option<Card>,
}

impl TurnRequest {
    /// Draw from the deck, no swap, no stop.
    #[must_use]
    pub fn from_deck() -> Self {
        Self::new(DrawSource::Deck)
    }

    /// Draw from the discard pile, no swap, no stop.
    #[must_use]
    pub fn from_discard() -> Self {
        Self::new(DrawSource::Discard)
    }

    #[must_use]
    pub fn new(take_from: DrawSource) -> Self {
        Self {
            take_from,
            swap_index: None,
            stop: false,
            drawn_card: None,
        }
    }

    /// Replace hand slot `index` with the drawn card.
    #[must_use]
    pub fn with_swap(mut self, index: usize) -> Self {
        self.swap_index = Some(index);
        self
    }

    /// Call stop once the card is placed.
    #[must_use]
    pub fn with_stop(mut self) -> Self {
        self.stop = true;
        self
    }

    /// Use a card the caller already drew instead of drawing again.
    #[must_use]
    pub fn with_drawn_card(mut self, card: Card) -> Self {
        self.drawn_card = Some(card);
        self
    }
}

/// What a turn led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnResult {
    /// Play passed to `next`.
    Continued { next: PlayerId },
    /// The round was resolved and the next one dealt.
    RoundEnded(RoundOutcome),
}

impl TurnResult {
    /// The resolved round, if this turn ended one.
    #[must_use]
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        match self {
            TurnResult::RoundEnded(outcome) => Some(outcome),
            TurnResult::Continued { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = TurnRequest::from_discard();
        assert_eq!(request.take_from, DrawSource::Discard);
        assert_eq!(request.swap_index, None);
        assert!(!request.stop);
        assert_eq!(request.drawn_card, None);
    }

    #[test]
    fn test_request_with_drawn_card() {
        let request = TurnRequest::from_deck().with_drawn_card(Card::QUEEN).with_swap(0);
        assert_eq!(request.drawn_card, Some(Card::QUEEN));
        assert_eq!(request.swap_index, Some(0));
    }

    #[test]
    fn test_turn_result_outcome() {
        let result = TurnResult::Continued { next: PlayerId::new(2) };
        assert!(result.outcome().is_none());
    }
}
