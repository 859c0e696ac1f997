//! Round outcomes and resolution results.

/// How a resolved round came out, seen from the player's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player holds 21 and the dealer does not.
    PlayerBlackjack,
    /// Dealer holds 21 and the player does not.
    DealerBlackjack,
    /// Equal totals, or both actors bust.
    Push,
    /// Player outscores the dealer without busting.
    PlayerWin,
    /// Dealer outscores the player without busting.
    DealerWin,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
}

impl Outcome {
    /// Balance change for this outcome at the given stake.
    ///
    /// A push pays the stake and a dealer blackjack pays nothing.
    #[must_use]
    pub const fn delta(self, stake: i64) -> i64 {
        match self {
            Self::PlayerBlackjack | Self::Push | Self::PlayerWin | Self::DealerBust => stake,
            Self::DealerBlackjack => 0,
            Self::DealerWin | Self::PlayerBust => -stake,
        }
    }

    /// Announcer line for the table display.
    #[must_use]
    pub fn message(self, player_total: u8, dealer_total: u8) -> String {
        match self {
            Self::PlayerBlackjack => "Player has Blackjack!".to_string(),
            Self::DealerBlackjack => "Dealer has Blackjack!".to_string(),
            Self::Push => "Push. Nobody won.".to_string(),
            Self::PlayerWin => format!("Player wins with {player_total}."),
            Self::DealerWin => format!("Dealer wins with {dealer_total}."),
            Self::PlayerBust => "Dealer wins. Player bust.".to_string(),
            Self::DealerBust => "Player wins. Dealer bust.".to_string(),
        }
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The round's outcome.
    pub outcome: Outcome,
    /// The player's final total.
    pub player_total: u8,
    /// The dealer's final total.
    pub dealer_total: u8,
    /// The balance change that was applied.
    pub delta: i64,
    /// Balance after the round, if the stored value parsed as an integer.
    pub balance: Option<i64>,
}

impl RoundResult {
    /// Announcer line for this result.
    #[must_use]
    pub fn message(&self) -> String {
        self.outcome.message(self.player_total, self.dealer_total)
    }
}
