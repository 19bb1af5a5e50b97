//! Console blackjack with persistent player records.

use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use casino21::store::DEFAULT_PATH;
use casino21::console::run_session;
use casino21::{Deck, PlayerStore, TableOptions};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player records file, one `name,balance,wins` line per player.
    #[arg(long, default_value = DEFAULT_PATH)]
    db: PathBuf,
    /// Seed for the deck shuffle. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Balance given to new players.
    #[arg(long, default_value_t = 100)]
    starting_balance: usize,
    /// Smallest accepted bet.
    #[arg(long, default_value_t = 2)]
    min_bet: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = TableOptions::default()
        .with_starting_balance(args.starting_balance)
        .with_min_bet(args.min_bet);
    log::info!("starting session with seed {seed}");

    let store = PlayerStore::open(&args.db).context("could not prepare player records")?;
    run_session(
        &store,
        Deck::new(seed),
        options,
        io::stdin().lock(),
        io::stdout().lock(),
    )
    .context("casino session failed")
}
