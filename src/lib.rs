//! A single-deck blackjack round engine with optional `no_std` support.
//!
//! The core is the [`Round`] state machine: it deals from a [`Deck`] that
//! rebuilds itself when exhausted, asks a [`DecisionSource`] to hit or stand,
//! plays the dealer out, and returns a [`RoundOutcome`] for the caller to
//! apply to a [`BalanceSink`] such as [`Player`].
//!
//! With the `std` feature the crate also provides a file-backed
//! [`PlayerStore`] and a text-menu [`Casino`] session.
//!
//! # Example
//!
//! ```
//! use casino21::{Deck, Decision, Player, Round, Scripted, TableOptions};
//!
//! let options = TableOptions::default();
//! let mut deck = Deck::new(42);
//! let mut player = Player::new("Ada", options.starting_balance, 0);
//!
//! let mut decisions = Scripted::new([Decision::Stand]);
//! let outcome = Round::new(10, &options).play(&mut deck, &mut decisions).unwrap();
//! outcome.apply_to(&mut player);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod roster;
pub mod round;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod store;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
#[cfg(feature = "std")]
pub use console::{Casino, Console};
pub use deck::{CardSource, Deck, SharedDeck};
#[cfg(feature = "std")]
pub use error::{SessionError, StoreError};
pub use error::{RecordError, RoundError, ScriptError};
pub use hand::{DealerHand, Hand};
pub use options::TableOptions;
pub use player::Player;
pub use result::{BalanceSink, Outcome, RoundOutcome};
pub use roster::Roster;
pub use round::{Decision, DecisionSource, Round, RoundState, Scripted, TableView};
#[cfg(feature = "std")]
pub use store::PlayerStore;
