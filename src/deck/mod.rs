//! Draw pile and discard pile.
//!
//! Both piles are stacks: the top card is the last element. The draw pile
//! is rebuilt from scratch every round; the discard pile starts empty.

mod piles;

pub use piles::{Deck, DiscardPile};
