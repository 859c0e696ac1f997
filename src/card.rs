//! Card types and deck constants.

use std::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in table order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// The glyph used in the canonical `"<rank> <suit>"` notation.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Hearts => '\u{2665}',
            Self::Diamonds => '\u{25C6}',
            Self::Clubs => '\u{2663}',
            Self::Spades => '\u{2660}',
        }
    }

    /// Whether the suit draws in red on the table.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Hearts | Self::Diamonds)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// The point value used for hand totals.
    ///
    /// An ace counts 1 here; promotion to 11 happens during hand valuation.
    /// Face cards count 10.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            1 => 1,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    fn rank_label(self) -> String {
        match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            _ => self.rank.to_string(),
        }
    }
}

impl fmt::Display for Card {
    /// Formats the card in `"<rank> <suit>"` notation, e.g. `A ♥`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank_label(), self.suit.glyph())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of distinct ranks.
pub const RANK_COUNT: usize = 13;
