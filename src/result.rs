//! Round settlement.

use crate::hand::BLACKJACK;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21 and loses the bet.
    Bust,
    /// Dealer busted or player finished higher.
    Win,
    /// Dealer finished higher.
    Lose,
    /// Equal totals, nobody busted.
    Push,
}

impl Outcome {
    /// Resolves a finished round.
    ///
    /// Checks run in order: player bust, then dealer bust or higher player
    /// total, then higher dealer total, else push. A player bust loses even
    /// when the dealer would have busted too.
    ///
    /// # Example
    ///
    /// ```
    /// use casino21::Outcome;
    ///
    /// assert_eq!(Outcome::resolve(false, 20, 22), Outcome::Win);
    /// assert_eq!(Outcome::resolve(false, 18, 18), Outcome::Push);
    /// assert_eq!(Outcome::resolve(true, 24, 25), Outcome::Bust);
    /// ```
    #[must_use]
    pub const fn resolve(player_busted: bool, player_value: u8, dealer_value: u8) -> Self {
        if player_busted {
            Self::Bust
        } else if dealer_value > BLACKJACK || player_value > dealer_value {
            Self::Win
        } else if player_value < dealer_value {
            Self::Lose
        } else {
            Self::Push
        }
    }
}

/// Receives the effects of a settled round.
///
/// Implementors own the player's balance and must keep it from going below
/// zero.
pub trait BalanceSink {
    /// Adds `amount` (possibly negative) to the balance.
    fn apply_delta(&mut self, amount: isize);
    /// Records one more win.
    fn credit_win(&mut self);
}

/// Result of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// How the round ended.
    pub outcome: Outcome,
    /// The bet the round was played for.
    pub bet: usize,
    /// Signed balance change for the player.
    pub delta: isize,
    /// Whether a win should be credited.
    pub player_won: bool,
    /// Whether the round was a tie.
    pub pushed: bool,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

impl RoundOutcome {
    /// Builds the outcome record for `bet`.
    #[must_use]
    pub fn new(outcome: Outcome, bet: usize, player_value: u8, dealer_value: u8) -> Self {
        let stake = isize::try_from(bet).unwrap_or(isize::MAX);
        let delta = match outcome {
            Outcome::Win => stake,
            Outcome::Bust | Outcome::Lose => -stake,
            Outcome::Push => 0,
        };

        Self {
            outcome,
            bet,
            delta,
            player_won: outcome == Outcome::Win,
            pushed: outcome == Outcome::Push,
            player_value,
            dealer_value,
        }
    }

    /// Applies the balance change and win credit to `sink`.
    pub fn apply_to<S: BalanceSink + ?Sized>(&self, sink: &mut S) {
        sink.apply_delta(self.delta);
        if self.player_won {
            sink.credit_win();
        }
    }
}
