//! Table configuration.

/// Fixed table constants for a session.
///
/// Stakes do not vary between rounds; the options set what the fixed values
/// are. Use the builder pattern to customize:
///
/// ```
/// use pocketjack::GameOptions;
///
/// let options = GameOptions::default().with_stake(50);
/// assert_eq!(options.stake, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Amount won or lost per resolved round.
    pub stake: i64,
    /// Balance written on the first-ever session. The player starts in debt.
    pub starting_balance: i64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            stake: 100,
            starting_balance: -1000,
        }
    }
}

impl GameOptions {
    /// Sets the per-round stake.
    #[must_use]
    pub const fn with_stake(mut self, stake: i64) -> Self {
        self.stake = stake;
        self
    }

    /// Sets the first-session starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use pocketjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(0);
    /// assert_eq!(options.starting_balance, 0);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }
}
