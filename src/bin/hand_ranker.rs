use anyhow::Context;
use clap::{Parser, Subcommand};
use hand_ranker::cards::{parse_cards, Card};
use hand_ranker::evaluator::{best_hand, classify, comparator, CachedClassifier, Evaluation};
use hand_ranker::passing::{explore, PassingConfig};
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(version, about = "Poker hand classification and comparison.")]
struct Cli {
    /// Log level filter (error, warn, info, debug, trace).
    #[clap(long, global = true, default_value = "info")]
    log_level: log::LevelFilter,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a hand of five or more cards, e.g. "Ah Kh Qh Jh 10h 2c 2d".
    Classify { cards: String },
    /// Compare two hands; prints 1, 0 or -1.
    Compare { hand_a: String, hand_b: String },
    /// Explore the card-passing game over random deals.
    Passing {
        /// RNG seed for reproducible deals.
        #[clap(long, default_value_t = 0)]
        seed: u64,
        /// Number of deals to play out.
        #[clap(long, default_value_t = 10)]
        games: usize,
        /// Cards per player.
        #[clap(long, default_value_t = 8)]
        hand_size: usize,
        /// Cards each player passes.
        #[clap(long = "pass", default_value_t = 4)]
        pass_count: usize,
    },
    /// Build the full five-card lookup table.
    Precompute,
}

fn parse_hand(s: &str) -> anyhow::Result<Vec<Card>> {
    parse_cards(s).with_context(|| format!("cannot parse hand '{s}'"))
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

fn describe(eval: &Evaluation) -> String {
    format!(
        "{} [{}] value={}",
        eval.classification,
        format_cards(&eval.best_five),
        eval.classification.value().raw()
    )
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Classify { cards } => {
            let hand = parse_hand(&cards)?;
            let eval = best_hand(&hand)?;
            println!("{}", describe(&eval));
        }
        Command::Compare { hand_a, hand_b } => {
            let a = parse_hand(&hand_a)?;
            let b = parse_hand(&hand_b)?;
            info!("A: {}", classify(&a)?);
            info!("B: {}", classify(&b)?);
            println!("{}", comparator(&a, &b)?);
        }
        Command::Passing { seed, games, hand_size, pass_count } => {
            let config = PassingConfig { hand_size, pass_count };
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let tally = explore(&config, games, &mut rng)?;
            println!("{tally}");
        }
        Command::Precompute => {
            let cache = CachedClassifier::precomputed();
            println!("{} hands", cache.len());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.log_level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
