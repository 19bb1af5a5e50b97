//! The in-memory list of known players.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use crate::player::Player;

/// Every player the casino knows about, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            players: Vec::new(),
        }
    }

    /// Parses one record per line.
    ///
    /// Blank lines are skipped; lines that are not a valid record are logged
    /// and skipped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut roster = Self::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line.parse::<Player>() {
                Ok(player) => roster.players.push(player),
                Err(err) => log::warn!("skipping player record on line {}: {err}", index + 1),
            }
        }

        roster
    }

    /// Formats every player as a `name,balance,wins` line.
    #[must_use]
    pub fn to_records(&self) -> String {
        let mut out = String::new();
        for player in &self.players {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{player}");
        }
        out
    }

    /// Finds a player by name, ignoring case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.is_named(name))
    }

    /// Finds a player by name for updating, ignoring case.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.is_named(name))
    }

    /// Returns the named player, adding them with `starting_balance` if they
    /// are new.
    ///
    /// The flag is `true` when the player was just created.
    pub fn get_or_create(&mut self, name: &str, starting_balance: usize) -> (&mut Player, bool) {
        let index = self.players.iter().position(|p| p.is_named(name));
        let is_new = index.is_none();
        let index = index.unwrap_or_else(|| {
            log::info!("registering new player {name}");
            self.players.push(Player::new(name, starting_balance, 0));
            self.players.len() - 1
        });

        (&mut self.players[index], is_new)
    }

    /// Returns every player tied for the most wins.
    #[must_use]
    pub fn top_players(&self) -> Vec<&Player> {
        let Some(most) = self.players.iter().map(Player::wins).max() else {
            return Vec::new();
        };

        self.players.iter().filter(|p| p.wins() == most).collect()
    }

    /// Iterates over the players in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Player> {
        self.players.iter()
    }

    /// Returns the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl FromIterator<Player> for Roster {
    fn from_iter<I: IntoIterator<Item = Player>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Player;
    type IntoIter = core::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}
