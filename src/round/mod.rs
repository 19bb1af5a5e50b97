//! The round engine: one deal, the player's turn, the dealer's turn, and
//! settlement.

use crate::card::Card;
use crate::deck::CardSource;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::result::RoundOutcome;

mod actions;
mod dealer;
pub mod decision;
pub mod state;

pub use decision::{Decision, DecisionSource, Scripted};
pub use state::{RoundState, TableView};

/// A single round of blackjack.
///
/// A round is played once and thrown away; the deck it draws from outlives
/// it. Either hand the whole round to [`Round::play`] with a
/// [`DecisionSource`], or drive it step by step with [`Round::deal`],
/// [`Round::hit`]/[`Round::stand`], [`Round::dealer_play`] and
/// [`Round::settle`].
///
/// # Example
///
/// ```
/// use casino21::{Deck, Decision, Round, Scripted, TableOptions};
///
/// let mut deck = Deck::new(7);
/// let mut player = Scripted::new([Decision::Stand]);
/// let outcome = Round::new(10, &TableOptions::default())
///     .play(&mut deck, &mut player)
///     .unwrap();
/// assert_eq!(outcome.bet, 10);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    bet: usize,
    player: Hand,
    dealer: DealerHand,
    state: RoundState,
    player_bust: bool,
    dealer_stands_on: u8,
}

impl Round {
    /// Creates a round for `bet`, which the caller has already validated.
    #[must_use]
    pub const fn new(bet: usize, options: &TableOptions) -> Self {
        Self {
            bet,
            player: Hand::new(),
            dealer: DealerHand::new(),
            state: RoundState::Dealing,
            player_bust: false,
            dealer_stands_on: options.dealer_stands_on,
        }
    }

    /// Plays the round to completion.
    ///
    /// Invalid decisions are ignored and the player is asked again. The dealer
    /// only plays if the player did not bust.
    ///
    /// # Errors
    ///
    /// Returns the decision source's error if it fails; the round is then
    /// abandoned without an outcome.
    pub fn play<S, D>(mut self, shoe: &mut S, decider: &mut D) -> Result<RoundOutcome, D::Error>
    where
        S: CardSource + ?Sized,
        D: DecisionSource + ?Sized,
    {
        self.deal_opening(shoe);
        decider.show(&self.view())?;

        while self.state == RoundState::PlayerTurn {
            match decider.decide(&self.view())? {
                Decision::Hit => {
                    self.take_card(shoe);
                    if self.state == RoundState::PlayerTurn {
                        decider.show(&self.view())?;
                    }
                }
                Decision::Stand => self.end_player_turn(),
                Decision::Invalid => {}
            }
        }

        if self.state == RoundState::DealerTurn {
            self.run_dealer(shoe);
        }

        let outcome = self.finish();
        decider.show(&self.view())?;
        Ok(outcome)
    }

    /// Returns what the player can currently see.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        TableView {
            state: self.state,
            player: self.player.cards(),
            dealer: self.dealer.visible_cards(),
            player_value: self.player.value(),
            dealer_value: self.dealer.visible_value(),
            hole_hidden: self.state.hides_hole() && self.dealer.len() > 1,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the bet this round is played for.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, including the hole card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns whether the player went over 21.
    #[must_use]
    pub const fn player_bust(&self) -> bool {
        self.player_bust
    }

    fn deal_opening<S: CardSource + ?Sized>(&mut self, shoe: &mut S) {
        self.player.add_card(shoe.draw());
        self.dealer.add_card(shoe.draw());
        self.player.add_card(shoe.draw());
        self.dealer.add_card(shoe.draw());
        self.state = RoundState::PlayerTurn;
    }

    fn take_card<S: CardSource + ?Sized>(&mut self, shoe: &mut S) -> Card {
        let card = shoe.draw();
        self.player.add_card(card);

        if self.player.is_bust() {
            self.player_bust = true;
            self.dealer.reveal_hole();
            self.state = RoundState::Settlement;
        }

        card
    }

    fn end_player_turn(&mut self) {
        self.dealer.reveal_hole();
        self.state = RoundState::DealerTurn;
    }
}
