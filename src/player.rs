//! Player records.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::RecordError;
use crate::result::BalanceSink;

/// A player's name, balance and win count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    balance: usize,
    wins: u32,
}

impl Player {
    /// Creates a player record.
    #[must_use]
    pub fn new(name: impl Into<String>, balance: usize, wins: u32) -> Self {
        Self {
            name: name.into(),
            balance,
            wins,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's balance.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the number of rounds the player has won.
    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    /// Returns whether the name matches, ignoring case.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl BalanceSink for Player {
    fn apply_delta(&mut self, amount: isize) {
        self.balance = self.balance.saturating_add_signed(amount);
    }

    fn credit_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }
}

/// Formats the player as a `name,balance,wins` record.
impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.name, self.balance, self.wins)
    }
}

/// Parses a `name,balance,wins` record.
///
/// Fields are trimmed. Numbers that do not parse, negative ones included,
/// read as zero.
///
/// ```
/// use casino21::Player;
///
/// let player: Player = "Ada, 250, x".parse().unwrap();
/// assert_eq!(player.name(), "Ada");
/// assert_eq!(player.balance(), 250);
/// assert_eq!(player.wins(), 0);
/// ```
impl FromStr for Player {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: alloc::vec::Vec<&str> = line.split(',').map(str::trim).collect();
        let [name, balance, wins] = fields[..] else {
            return Err(RecordError::FieldCount(fields.len()));
        };

        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            balance: balance.parse().unwrap_or(0),
            wins: wins.parse().unwrap_or(0),
        })
    }
}
