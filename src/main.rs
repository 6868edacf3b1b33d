//! Assembly: Endgame - CLI
//!
//! Guess the word before every programming language but Assembly is gone.
//! Play in the TUI, in plain line mode, or let a strategy play many games.

use anyhow::{Context, Result};
use assembly_endgame::{
    catalog::LANGUAGES,
    commands::{SimulationConfig, run_simple, run_simulation},
    game::Session,
    output::print_simulation_result,
    solver::StrategyType,
    wordlists::{WordPool, loader::load_from_file},
};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "assembly_endgame",
    about = "Guess the word in under 8 attempts to keep the programming world safe from Assembly!",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for word selection (default: OS entropy)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. 'info' or 'assembly_endgame=debug' (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one letter per line, no TUI)
    Simple,

    /// Let a strategy play many games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Strategy: candidates (default), frequency, random
        #[arg(
            short = 'g',
            long,
            default_value = "candidates",
            value_parser = ["candidates", "frequency", "random"]
        )]
        strategy: String,
    },
}

/// Logs go to stderr; the default level stays quiet enough for the TUI
fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the word pool based on the -w flag
fn load_pool(wordlist: &str) -> Result<WordPool> {
    match wordlist {
        "embedded" => Ok(WordPool::embedded()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {path}"))?;
            WordPool::new(words).with_context(|| format!("no usable words in {path}"))
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let pool = load_pool(&cli.wordlist)?;
    tracing::debug!(words = pool.len(), seed = ?cli.seed, "word pool ready");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(pool, cli.seed),
        Commands::Simple => run_simple_command(pool, cli.seed),
        Commands::Simulate { count, strategy } => {
            run_simulate_command(&pool, count, &strategy, cli.seed);
            Ok(())
        }
    }
}

fn run_play_command(pool: WordPool, seed: Option<u64>) -> Result<()> {
    use assembly_endgame::interactive::{App, run_tui};

    let session = Session::new(pool, make_rng(seed), LANGUAGES);
    run_tui(App::new(session))
}

fn run_simple_command(pool: WordPool, seed: Option<u64>) -> Result<()> {
    let mut session = Session::new(pool, make_rng(seed), LANGUAGES);
    run_simple(&mut session)
}

fn run_simulate_command(pool: &WordPool, count: usize, strategy_name: &str, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);
    println!("Simulating {count} games with the {strategy_name} strategy (seed {seed})...");

    let strategy = StrategyType::from_name(strategy_name, pool.words());
    let mut config = SimulationConfig::new(count, seed);
    config.show_progress = true;

    let result = run_simulation(&strategy, pool, LANGUAGES, &config);
    print_simulation_result(&result, strategy_name);
}
