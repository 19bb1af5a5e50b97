//! Round state types.

use crate::card::Card;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Waiting for the opening four cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are final and the outcome can be computed.
    Settlement,
    /// Outcome has been produced.
    Done,
}

impl RoundState {
    /// Returns whether the dealer's hole card is still face down.
    #[must_use]
    pub const fn hides_hole(self) -> bool {
        matches!(self, Self::Dealing | Self::PlayerTurn)
    }
}

/// Read-only projection of the table for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView<'a> {
    /// Current round state.
    pub state: RoundState,
    /// The player's cards.
    pub player: &'a [Card],
    /// The dealer's cards that are face up.
    pub dealer: &'a [Card],
    /// Value of the player's hand.
    pub player_value: u8,
    /// Value of the dealer's face-up cards.
    pub dealer_value: u8,
    /// Whether the dealer has a face-down card not included in `dealer`.
    pub hole_hidden: bool,
}
