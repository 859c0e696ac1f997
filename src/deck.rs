//! Deck generation and dealing.

use crate::card::{Card, DECK_SIZE, RANK_COUNT, Suit};
use crate::error::DeckError;
use crate::rng::RandomSource;

/// The table's cards, split into an undealt pool and a played history.
///
/// After a shuffle every card of the 52-card cross-product sits in exactly
/// one of the two sequences, and their lengths always sum to 52.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    undealt: Vec<Card>,
    played: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck. Call [`shuffle`](Self::shuffle) before dealing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            undealt: Vec::new(),
            played: Vec::new(),
        }
    }

    /// Populates the pool with all 52 unique cards in a randomized order.
    ///
    /// Sampling is by rejection: random (rank, suit) pairs are drawn and
    /// collisions discarded until the pool holds the full cross-product.
    /// Collisions get more frequent as the pool fills; fine at a fixed 52
    /// cards. Clears the played history.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        self.undealt.clear();
        self.played.clear();

        while self.undealt.len() < DECK_SIZE {
            let rank = rng.next_in(RANK_COUNT) as u8 + 1;
            let suit = Suit::ALL[rng.next_in(Suit::ALL.len())];
            let card = Card::new(suit, rank);
            if !self.undealt.contains(&card) {
                self.undealt.push(card);
            }
        }
    }

    /// Deals the top card of the pool into the played history.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the pool is empty. A full pool
    /// outlasts any single round, so this is a fatal condition rather than a
    /// normal path.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.undealt.pop().ok_or(DeckError::Exhausted)?;
        self.played.push(card);
        Ok(card)
    }

    /// Replaces the undealt pool with a known card order.
    ///
    /// The last card of `cards` is dealt first. Clears the played history.
    pub fn load(&mut self, cards: Vec<Card>) {
        self.undealt = cards;
        self.played.clear();
    }

    /// The undealt pool, bottom card first.
    #[must_use]
    pub fn undealt(&self) -> &[Card] {
        &self.undealt
    }

    /// The dealt history, oldest card first.
    #[must_use]
    pub fn played(&self) -> &[Card] {
        &self.played
    }
}
