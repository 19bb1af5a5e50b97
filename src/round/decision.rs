//! Player decisions and where they come from.

use alloc::collections::VecDeque;

use crate::error::ScriptError;

use super::TableView;

/// A player's answer to the hit-or-stand prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Unrecognised input; the round asks again.
    Invalid,
}

/// Supplies decisions during the player's turn.
///
/// The round blocks on [`decide`](DecisionSource::decide) until it returns.
/// An error aborts the round without settling it.
pub trait DecisionSource {
    /// Error raised when no decision can be produced.
    type Error;

    /// Returns the next decision for the table shown in `view`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce a decision.
    fn decide(&mut self, view: &TableView<'_>) -> Result<Decision, Self::Error>;

    /// Called after the deal, after each hit that does not bust, and once at
    /// settlement with every card face up.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to present the table.
    fn show(&mut self, view: &TableView<'_>) -> Result<(), Self::Error> {
        let _ = view;
        Ok(())
    }
}

impl<D: DecisionSource + ?Sized> DecisionSource for &mut D {
    type Error = D::Error;

    fn decide(&mut self, view: &TableView<'_>) -> Result<Decision, Self::Error> {
        (**self).decide(view)
    }

    fn show(&mut self, view: &TableView<'_>) -> Result<(), Self::Error> {
        (**self).show(view)
    }
}

/// Replays a fixed list of decisions.
///
/// # Example
///
/// ```
/// use casino21::{Decision, Scripted};
///
/// let script = Scripted::new([Decision::Hit, Decision::Stand]);
/// assert_eq!(script.remaining(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    decisions: VecDeque<Decision>,
    asked: usize,
}

impl Scripted {
    /// Creates a script from `decisions`, replayed in order.
    #[must_use]
    pub fn new(decisions: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            asked: 0,
        }
    }

    /// Returns the number of decisions not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.decisions.len()
    }

    /// Returns how many times the round asked for a decision.
    #[must_use]
    pub const fn asked(&self) -> usize {
        self.asked
    }
}

impl DecisionSource for Scripted {
    type Error = ScriptError;

    fn decide(&mut self, _view: &TableView<'_>) -> Result<Decision, Self::Error> {
        self.asked += 1;
        self.decisions.pop_front().ok_or(ScriptError::Exhausted)
    }
}
