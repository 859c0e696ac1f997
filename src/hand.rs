//! Actor hands and total valuation.

use std::fmt;

use crate::card::Card;

/// Who holds a hand; used for logging and table labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// The human player.
    Player,
    /// The automated dealer.
    Dealer,
}

impl Actor {
    /// The actor's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An actor's dealt cards with their running total.
///
/// The total is recomputed on every mutation and is never stale.
#[derive(Debug, Clone)]
pub struct Hand {
    actor: Actor,
    cards: Vec<Card>,
    values: Vec<u8>,
    total: u8,
}

impl Hand {
    /// Creates an empty hand for the given actor.
    #[must_use]
    pub const fn new(actor: Actor) -> Self {
        Self {
            actor,
            cards: Vec::new(),
            values: Vec::new(),
            total: 0,
        }
    }

    /// Appends a dealt card and recomputes the total.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.values.push(card.value());
        self.recompute();
    }

    /// Recomputes the total from the held point values.
    ///
    /// Values are taken highest first, so every non-ace lands before any ace
    /// is weighed. An ace counts 11 when that keeps the running total at 21
    /// or under, and 1 otherwise. Each ace is weighed on its own against the
    /// running total at the time it is reached, not jointly with the other
    /// aces.
    fn recompute(&mut self) {
        self.values.sort_unstable_by(|a, b| b.cmp(a));

        let mut total: u8 = 0;
        for &value in &self.values {
            let counted = if value == 1 && total <= 10 { 11 } else { value };
            total = total.saturating_add(counted);
        }
        self.total = total;
    }

    /// The current total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// The cards in the hand, in dealt order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Who holds this hand.
    #[must_use]
    pub const fn actor(&self) -> Actor {
        self.actor
    }

    /// A total of exactly 21, on any number of cards.
    #[must_use]
    pub const fn is_blackjack(&self) -> bool {
        self.total == 21
    }

    /// A total over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > 21
    }

    /// The number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.values.clear();
        self.total = 0;
    }
}

impl fmt::Display for Hand {
    /// Formats the held cards separated by spaces, in dealt order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
