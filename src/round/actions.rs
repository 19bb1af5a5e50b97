use crate::card::Card;
use crate::deck::CardSource;
use crate::error::RoundError;

use super::{Decision, Round, RoundState};

impl Round {
    fn ensure_state(&self, expected: RoundState) -> Result<(), RoundError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidState)
        }
    }

    /// Deals two cards each, alternating player and dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has already been dealt.
    pub fn deal<S: CardSource + ?Sized>(&mut self, shoe: &mut S) -> Result<(), RoundError> {
        self.ensure_state(RoundState::Dealing)?;
        self.deal_opening(shoe);
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the player's turn and skips the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit<S: CardSource + ?Sized>(&mut self, shoe: &mut S) -> Result<Card, RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;
        Ok(self.take_card(shoe))
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;
        self.end_player_turn();
        Ok(())
    }

    /// Applies one decision. Returns the card drawn on a hit.
    ///
    /// [`Decision::Invalid`] leaves the round untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn apply<S: CardSource + ?Sized>(
        &mut self,
        decision: Decision,
        shoe: &mut S,
    ) -> Result<Option<Card>, RoundError> {
        self.ensure_state(RoundState::PlayerTurn)?;
        match decision {
            Decision::Hit => self.hit(shoe).map(Some),
            Decision::Stand => self.stand().map(|()| None),
            Decision::Invalid => Ok(None),
        }
    }
}
