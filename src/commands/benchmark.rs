//! Benchmark command
//!
//! Auto-plays a run of bank words and summarises how many guesses the engine
//! needed.

use super::solve::solve_word;
use crate::error::GuessError;
use crate::solver::Guesser;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<String>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved words
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

/// Solve the first `count` words of the engine's bank one after another
///
/// Failed games count as `max_guesses` attempts. The engine is left holding
/// the last game's history.
///
/// # Errors
///
/// Returns an error if a game runs out of candidates, which would mean the
/// filter eliminated an answer using its own honest feedback.
pub fn run_benchmark(
    guesser: &mut Guesser,
    count: usize,
    show_progress: bool,
) -> Result<BenchmarkResult, GuessError> {
    let targets: Vec<String> = guesser
        .bank()
        .words()
        .iter()
        .take(count)
        .map(|w| w.text().to_string())
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut solved = 0;
    let mut failed = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for target in &targets {
        pb.set_message(target.clone());
        let result = solve_word(guesser, target)?;
        let guesses = result.guesses.len();

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);

        if result.success {
            solved += 1;
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            warn!("Failed to solve {target} in {guesses} guesses");
            failed.push(target.clone());
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let total_words = targets.len();
    Ok(BenchmarkResult {
        total_words,
        solved,
        failed,
        total_guesses,
        average_guesses: if total_words == 0 {
            0.0
        } else {
            total_guesses as f64 / total_words as f64
        },
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration: start.elapsed(),
    })
}
