use std::error::Error;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use burnpile::{Game, GameOutcome, TerminalInteraction, VisualOptions};

#[derive(Parser, Debug)]
#[command(
    name = "play",
    about = "Play \"ten clears, seven reverses, two resets\" at the terminal."
)]
struct Args {
    /// Number of players sharing this terminal (1-5)
    #[arg(short = 'p', long = "players", default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=5))]
    players: u8,

    /// Shuffle seed; a random one is used when omitted
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Hide the deck counts and the seat table each turn
    #[arg(long)]
    compact: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, players = args.players, "starting game");

    let mut game = Game::builder(usize::from(args.players))?
        .with_seed(seed)
        .build()?;
    let options = VisualOptions {
        show_table: !args.compact,
        show_counts: !args.compact,
    };
    let mut io = TerminalInteraction::stdio().with_options(options);
    match game.run(&mut io)? {
        GameOutcome::Finished { .. } => println!("Thanks for playing!"),
        GameOutcome::Cancelled { .. } => println!("Game abandoned."),
    }
    Ok(())
}
