//! ASCII tables for the console.

use alloc::string::String;
use core::fmt::Write as _;

use crate::player::Player;
use crate::result::{Outcome, RoundOutcome};
use crate::round::TableView;

/// Renders the two-column player/dealer board.
///
/// The dealer's hole card shows as a blank cell while it is face down.
#[must_use]
pub fn board(view: &TableView<'_>) -> String {
    let mut out = String::new();
    out.push_str("               -- BLACK JACK --\n");
    out.push_str("+======================+=====================+\n");
    out.push_str("|| PLAYER              | DEALER             ||\n");
    out.push_str("+======================+=====================+\n");

    let dealer_rows = view.dealer.len() + usize::from(view.hole_hidden);
    let rows = view.player.len().max(dealer_rows);

    for row in 0..rows {
        let left = view.player.get(row).map(ToString::to_string).unwrap_or_default();
        let right = view.dealer.get(row).map(ToString::to_string).unwrap_or_default();

        let _ = writeln!(out, "| {left:<20}|| {right:<19} |");
        out.push_str("+----------------------+---------------------+\n");
    }

    out.push('\n');
    out
}

/// Renders the greeting shown when a player sits down.
#[must_use]
pub fn welcome(name: &str, balance: usize, is_new: bool) -> String {
    let greeting = if is_new { "Welcome" } else { "Welcome back" };
    let rule = "*".repeat(66);
    format!(
        "{rule}\n***    {greeting} {name}    ---   Your initial balance is: {balance}  $    ***\n{rule}\n\n"
    )
}

/// Renders the line announcing a round's result.
#[must_use]
pub fn settlement(outcome: &RoundOutcome) -> String {
    match outcome.outcome {
        Outcome::Win => format!("You won {}$\n", outcome.bet),
        Outcome::Bust | Outcome::Lose => format!("You lost {}$\n", outcome.bet),
        Outcome::Push => String::from("Push (tie)\n"),
    }
}

/// Renders the top-players table.
#[must_use]
pub fn top_players(players: &[&Player]) -> String {
    let mut out = String::new();
    out.push_str("              - TOP PLAYERS -\n");
    out.push_str("+====================+=================+\n");
    out.push_str("| NAME               | # WINS          |\n");
    out.push_str("+====================+=================+\n");

    for player in players {
        let _ = writeln!(
            out,
            "| {:<18} | {:<7}         |",
            player.name(),
            player.wins()
        );
        out.push_str("+--------------------------------------+\n");
    }

    out
}

/// Renders one player's name, wins and balance.
#[must_use]
pub fn player_info(player: &Player) -> String {
    let mut out = String::new();
    out.push_str("                       - PLAYER INFO -\n");
    out.push_str("+====================+=================+=================+\n");
    out.push_str("| NAME               | # WINS          | BALANCE         |\n");
    out.push_str("+====================+=================+=================+\n");

    let balance = format!("{}  $", player.balance());
    let _ = writeln!(
        out,
        "| {:<18} | {:<7}         | {balance:<13}   |",
        player.name(),
        player.wins()
    );
    out.push_str("+--------------------------------------------------------+\n\n");
    out
}
