//! Line-oriented prompts over any reader/writer pair.

use std::io::{self, BufRead, Write};

use crate::round::{Decision, DecisionSource, TableView};

use super::render;

/// Reads answers from `input` and writes prompts to `output`.
///
/// End of input is treated as the most conservative answer for each prompt:
/// exit at the main menu, back in the search menu, no name, a zero bet, and
/// "no" to continuing. Only the hit/stand prompt fails on end of input,
/// since a round cannot finish without a decision.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over `input` and `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Returns the writer.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Writes `text` as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    /// Reads one trimmed line, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let answer = self.read_line()?;
        writeln!(self.output)?;
        Ok(answer)
    }

    fn choice(&mut self, options: &[&str], on_eof: char) -> io::Result<char> {
        writeln!(self.output, "\nSelect one of these options:\n")?;
        for option in options {
            writeln!(self.output, "        {option}")?;
        }
        writeln!(self.output)?;

        Ok(match self.ask("Enter a choice: ")? {
            None => on_eof,
            Some(answer) => answer
                .chars()
                .next()
                .map_or(' ', |c| c.to_ascii_uppercase()),
        })
    }

    /// Shows the main menu and returns the upper-cased first character of the
    /// answer, `' '` for a blank answer, or `'E'` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn main_choice(&mut self) -> io::Result<char> {
        self.choice(&["(P) Play Game", "(S) Search", "(E) Exit"], 'E')
    }

    /// Shows the search menu; `'B'` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn search_choice(&mut self) -> io::Result<char> {
        self.choice(
            &[
                "(T) Top player (Most number of wins)",
                "(N) Looking for a Name",
                "(B) Back to Main menu",
            ],
            'B',
        )
    }

    /// Asks `question` for a name; empty at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn prompt_name(&mut self, question: &str) -> io::Result<String> {
        Ok(self.ask(question)?.unwrap_or_default())
    }

    /// Asks for a bet until one between `min` and `max` (inclusive) or `0`
    /// is entered. `0` means "back to the menu".
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn prompt_bet(&mut self, min: usize, max: usize) -> io::Result<usize> {
        loop {
            let Some(answer) = self.ask("How much do you want to bet this round? ")? else {
                return Ok(0);
            };

            let Ok(bet) = answer.parse::<i64>() else {
                writeln!(self.output, "please enter a whole number.\n")?;
                continue;
            };

            if bet == 0 {
                return Ok(0);
            }

            let Some(bet) = usize::try_from(bet).ok().filter(|&bet| bet >= min) else {
                writeln!(self.output, "minimum bet is ${min}.\n")?;
                continue;
            };

            if bet > max {
                writeln!(self.output, "over your balance (${max}).\n")?;
                continue;
            }

            return Ok(bet);
        }
    }

    /// Asks a yes/no question; only an answer starting with `y` or `Y` is yes.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(answer.starts_with(['y', 'Y']))
    }

    /// Waits for the user to press Enter.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn pause(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nPress Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        writeln!(self.output)
    }
}

/// Parses the hit/stand menu answer.
#[must_use]
pub fn parse_decision(answer: &str) -> Decision {
    match answer {
        "1" => Decision::Hit,
        "2" => Decision::Stand,
        _ => Decision::Invalid,
    }
}

impl<R: BufRead, W: Write> DecisionSource for Console<R, W> {
    type Error = io::Error;

    fn decide(&mut self, _view: &TableView<'_>) -> Result<Decision, Self::Error> {
        writeln!(self.output, "Select an option:\n")?;
        writeln!(self.output, "                  1. Hit")?;
        writeln!(self.output, "                  2. Stand\n")?;

        let answer = self.ask("Your choice: ")?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input closed during a round")
        })?;
        Ok(parse_decision(&answer))
    }

    fn show(&mut self, view: &TableView<'_>) -> Result<(), Self::Error> {
        self.say(&render::board(view))
    }
}
