use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::RoundError;
use crate::result::{Outcome, RoundOutcome};

use super::{Round, RoundState};

impl Round {
    pub(super) fn run_dealer<S: CardSource + ?Sized>(&mut self, shoe: &mut S) -> Vec<Card> {
        let mut drawn_cards = Vec::new();

        // Busting is allowed here; settlement sorts it out.
        while self.dealer.value() < self.dealer_stands_on {
            let card = shoe.draw();
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        self.state = RoundState::Settlement;
        drawn_cards
    }

    pub(super) fn finish(&mut self) -> RoundOutcome {
        let player_value = self.player.value();
        let dealer_value = self.dealer.value();
        let outcome = Outcome::resolve(self.player_bust, player_value, dealer_value);
        self.state = RoundState::Done;

        let result = RoundOutcome::new(outcome, self.bet, player_value, dealer_value);
        log::debug!(
            "round settled: {outcome:?} (player {player_value}, dealer {dealer_value}, delta {})",
            result.delta
        );
        result
    }

    /// Dealer draws until reaching the table's stand value.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn, which
    /// includes every round where the player busted.
    pub fn dealer_play<S: CardSource + ?Sized>(
        &mut self,
        shoe: &mut S,
    ) -> Result<Vec<Card>, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        Ok(self.run_dealer(shoe))
    }

    /// Compares the final hands and produces the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the hands are not final yet or the round was
    /// already settled.
    pub fn settle(&mut self) -> Result<RoundOutcome, RoundError> {
        if self.state != RoundState::Settlement {
            return Err(RoundError::InvalidState);
        }

        Ok(self.finish())
    }
}
