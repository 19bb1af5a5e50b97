//! Table configuration options.

/// Configuration for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use casino21::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_balance(250)
///     .with_min_bet(5);
/// assert_eq!(options.dealer_stands_on, 17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Balance given to a player the first time they sit down.
    pub starting_balance: usize,
    /// Smallest bet the table accepts.
    pub min_bet: usize,
    /// The dealer draws while below this value.
    pub dealer_stands_on: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_balance: 100,
            min_bet: 2,
            dealer_stands_on: 17,
        }
    }
}

impl TableOptions {
    /// Sets the balance given to new players.
    ///
    /// # Example
    ///
    /// ```
    /// use casino21::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_balance(500);
    /// assert_eq!(options.starting_balance, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, starting_balance: usize) -> Self {
        self.starting_balance = starting_balance;
        self
    }

    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use casino21::TableOptions;
    ///
    /// let options = TableOptions::default().with_min_bet(10);
    /// assert_eq!(options.min_bet, 10);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the value at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use casino21::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }
}
