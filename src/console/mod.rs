//! Text-menu front end: the main menu, the play flow and the player search.

use std::io::{self, BufRead, Write};

use crate::deck::Deck;
use crate::error::SessionError;
use crate::options::TableOptions;
use crate::roster::Roster;
use crate::round::Round;
use crate::store::PlayerStore;

mod prompt;
pub mod render;

pub use prompt::{Console, parse_decision};

/// Loads the roster from `store`, runs a session over `input` and `output`,
/// then saves the roster.
///
/// The roster is saved even when the session ends with a console error. The
/// closing messages are written on a best-effort basis and never prevent the
/// save.
///
/// # Errors
///
/// Returns a store error if the roster cannot be loaded or saved, otherwise
/// the console error that ended the session.
pub fn run_session<R: BufRead, W: Write>(
    store: &PlayerStore,
    deck: Deck,
    options: TableOptions,
    input: R,
    output: W,
) -> Result<(), SessionError> {
    let roster = store.load()?;
    let mut casino = Casino::new(Console::new(input, output), roster, deck, options);
    let session = casino.run();
    if let Err(err) = &session {
        log::warn!("session ended early: {err}");
    }

    let (mut console, roster, _) = casino.into_parts();
    say_closing(&mut console, "Saving...\n");
    store.save(&roster)?;
    say_closing(&mut console, "Done! Please visit us again!\n");

    session.map_err(SessionError::from)
}

fn say_closing<R: BufRead, W: Write>(console: &mut Console<R, W>, text: &str) {
    if let Err(err) = console.say(text) {
        log::warn!("could not write {:?}: {err}", text.trim_end());
    }
}

/// One casino session: a roster, a deck shared by every round, and a console.
#[derive(Debug)]
pub struct Casino<R, W> {
    console: Console<R, W>,
    roster: Roster,
    deck: Deck,
    options: TableOptions,
}

impl<R: BufRead, W: Write> Casino<R, W> {
    /// Creates a session.
    pub const fn new(
        console: Console<R, W>,
        roster: Roster,
        deck: Deck,
        options: TableOptions,
    ) -> Self {
        Self {
            console,
            roster,
            deck,
            options,
        }
    }

    /// Returns the roster, including every change made this session.
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the session's deck.
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the console.
    pub const fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Takes the session apart.
    pub fn into_parts(self) -> (Console<R, W>, Roster, Deck) {
        (self.console, self.roster, self.deck)
    }

    /// Runs the main menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails, including input ending in the
    /// middle of a round.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.console.main_choice()? {
                'P' => self.play()?,
                'S' => self.search()?,
                'E' => return Ok(()),
                _ => self.console.say("invalid choice.\n\n")?,
            }
        }
    }

    fn play(&mut self) -> io::Result<()> {
        let Self {
            console,
            roster,
            deck,
            options,
        } = self;

        let name = console.prompt_name("Enter your name: ")?;
        if name.is_empty() {
            return console.say("name cannot be empty.\n\n");
        }
        if name.contains(',') {
            return console.say("name cannot contain ','.\n\n");
        }

        let (player, is_new) = roster.get_or_create(&name, options.starting_balance);
        console.say(&render::welcome(player.name(), player.balance(), is_new))?;

        loop {
            if player.balance() == 0 {
                return console.say("your balance is $0. returning to main menu.\n\n");
            }

            let bet = console.prompt_bet(options.min_bet, player.balance())?;
            if bet == 0 {
                return Ok(());
            }

            let outcome = Round::new(bet, options).play(deck, console)?;
            outcome.apply_to(player);
            log::info!(
                "{} {:?} {bet} (balance {}, wins {})",
                player.name(),
                outcome.outcome,
                player.balance(),
                player.wins()
            );

            console.say(&render::settlement(&outcome))?;
            console.say("\n\n")?;

            if !console.confirm("Do you want to continue(y/n)? ")? {
                return Ok(());
            }
        }
    }

    fn search(&mut self) -> io::Result<()> {
        loop {
            match self.console.search_choice()? {
                'T' => {
                    let top = self.roster.top_players();
                    if top.is_empty() {
                        self.console.say("no players in database.\n")?;
                    } else {
                        self.console.say(&render::top_players(&top))?;
                    }
                    self.console.pause()?;
                }
                'N' => {
                    let name = self.console.prompt_name("What is your name: ")?;
                    match self.roster.find(&name) {
                        Some(player) => self.console.say(&render::player_info(player))?,
                        None => self.console.say("player not found.\n")?,
                    }
                    self.console.pause()?;
                }
                'B' => return Ok(()),
                _ => self.console.say("invalid choice.\n\n")?,
            }
        }
    }
}
