//! Simulate command
//!
//! Plays many seeded games in parallel with an automatic strategy and
//! collects win/loss statistics.

use crate::catalog::Language;
use crate::game::{Game, GameStatus};
use crate::solver::{Strategy, play_out};
use crate::wordlists::WordPool;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Parameters of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    /// Game `i` uses a generator seeded with `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            show_progress: false,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone)]
struct GameRecord {
    status: GameStatus,
    wrong_guesses: usize,
}

/// Aggregated statistics of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub average_wrong_guesses: f64,
    /// Wrong guesses spent in won games
    pub wrong_distribution: BTreeMap<usize, usize>,
    pub hardest_words: Vec<String>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `config.games` games with `strategy` and summarize them
///
/// Each game gets its own generator derived from the base seed, so results
/// are reproducible regardless of how rayon schedules the work.
pub fn run_simulation<S: Strategy + Sync>(
    strategy: &S,
    pool: &WordPool,
    catalog: &[Language],
    config: &SimulationConfig,
) -> SimulationResult {
    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let records: Vec<(String, GameRecord)> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let target = pool.random_word(&mut rng);
            let word = target.text().to_string();
            let mut game = Game::with_catalog(target, catalog);
            let status = play_out(strategy, &mut game, &mut rng);
            pb.inc(1);
            (
                word,
                GameRecord {
                    status,
                    wrong_guesses: game.wrong_guess_count(),
                },
            )
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    summarize(&records, duration)
}

fn summarize(records: &[(String, GameRecord)], duration: Duration) -> SimulationResult {
    let total_games = records.len();
    let wins = records
        .iter()
        .filter(|(_, r)| r.status == GameStatus::Won)
        .count();
    let losses = records
        .iter()
        .filter(|(_, r)| r.status == GameStatus::Lost)
        .count();

    let mut wrong_distribution = BTreeMap::new();
    for (_, record) in records.iter().filter(|(_, r)| r.status == GameStatus::Won) {
        *wrong_distribution.entry(record.wrong_guesses).or_insert(0) += 1;
    }

    let mut hardest_words: Vec<String> = records
        .iter()
        .filter(|(_, r)| r.status == GameStatus::Lost)
        .map(|(word, _)| word.clone())
        .collect();
    hardest_words.sort_unstable();
    hardest_words.dedup();
    hardest_words.truncate(10);

    let total_wrong: usize = records.iter().map(|(_, r)| r.wrong_guesses).sum();
    let ratio = |n: usize| {
        if total_games == 0 {
            0.0
        } else {
            n as f64 / total_games as f64
        }
    };

    SimulationResult {
        total_games,
        wins,
        losses,
        win_rate: ratio(wins) * 100.0,
        average_wrong_guesses: ratio(total_wrong),
        wrong_distribution,
        hardest_words,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
