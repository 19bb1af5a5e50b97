//! The deck: a single 52-card pack that rebuilds itself when exhausted.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::sync::{Mutex, MutexGuard};

/// Anything that can deal the next card.
///
/// The round engine only ever asks for one card at a time, so a source never
/// runs dry: [`Deck`] rebuilds itself, and test doubles can do whatever they
/// like.
pub trait CardSource {
    /// Removes and returns the next card.
    fn draw(&mut self) -> Card;
}

impl<T: CardSource + ?Sized> CardSource for &mut T {
    fn draw(&mut self) -> Card {
        (**self).draw()
    }
}

/// A single deck of cards.
///
/// Cards are dealt from the end of the internal vector. When the last card
/// has been dealt, the next draw rebuilds all 52 cards and shuffles them
/// before returning one, so drawing never fails.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
    generation: usize,
}

impl Deck {
    /// Creates a freshly built and shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use casino21::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.remaining(), DECK_SIZE);
    /// assert_eq!(deck.generation(), 1);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
            generation: 0,
        };
        let pack = deck.shuffled_pack();
        deck.cards.extend(pack);
        deck
    }

    /// Creates a deck that deals `draws` in order, `draws[0]` first.
    ///
    /// Once the stacked cards run out the deck rebuilds as usual. Useful for
    /// replaying a known sequence of cards.
    #[must_use]
    pub fn stacked(seed: u64, draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
            generation: 0,
        }
    }

    /// Builds one of each card, shuffled. The last card is the top.
    fn shuffled_pack(&mut self) -> [Card; DECK_SIZE] {
        let mut pack = [Card::new(Suit::Spades, 1); DECK_SIZE];
        let ordered = Suit::ALL
            .into_iter()
            .flat_map(|suit| (1..=13).map(move |rank| Card::new(suit, rank)));
        for (slot, card) in pack.iter_mut().zip(ordered) {
            *slot = card;
        }

        // Forward Fisher-Yates: position i swaps with a uniform j in 0..=i.
        for i in 1..pack.len() {
            let j = self.rng.random_range(0..=i);
            pack.swap(i, j);
        }

        self.generation += 1;
        log::debug!("deck rebuilt (generation {})", self.generation);
        pack
    }

    /// Draws the top card, rebuilding the deck first if it is empty.
    pub fn draw(&mut self) -> Card {
        let card = self.cards.pop().unwrap_or_else(|| self.rebuild());
        log::trace!("drew {card} ({} left)", self.cards.len());
        card
    }

    /// Refills the empty deck and deals its top card.
    fn rebuild(&mut self) -> Card {
        let [rest @ .., top] = self.shuffled_pack();
        self.cards.extend(rest);
        top
    }

    /// Returns the number of cards left before the next rebuild.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the next draw will trigger a rebuild.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many times the deck has been built, including the first build.
    #[must_use]
    pub const fn generation(&self) -> usize {
        self.generation
    }
}

impl CardSource for Deck {
    fn draw(&mut self) -> Card {
        Self::draw(self)
    }
}

/// A deck shared between callers that may run on different threads.
///
/// Each [`draw`](SharedDeck::draw) holds the lock for the whole
/// draw-and-maybe-rebuild step. To keep one round's cards contiguous, hold
/// [`lock`](SharedDeck::lock) for the duration of the round instead.
pub struct SharedDeck {
    deck: Mutex<Deck>,
}

impl SharedDeck {
    /// Wraps a deck for shared use.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Draws one card under the lock.
    pub fn draw(&self) -> Card {
        self.deck.lock().draw()
    }

    /// Grants exclusive access to the deck until the guard is dropped.
    pub fn lock(&self) -> MutexGuard<'_, Deck> {
        self.deck.lock()
    }

    /// Returns the number of cards left before the next rebuild.
    pub fn remaining(&self) -> usize {
        self.deck.lock().remaining()
    }

    /// Unwraps the deck.
    pub fn into_inner(self) -> Deck {
        self.deck.into_inner()
    }
}

impl CardSource for &SharedDeck {
    fn draw(&mut self) -> Card {
        SharedDeck::draw(self)
    }
}
