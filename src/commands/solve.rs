//! Word solving command
//!
//! Plays a game against a known target with honest feedback and records the
//! path the engine takes.

use crate::core::{Feedback, Word, is_solved};
use crate::error::GuessError;
use crate::solver::Guesser;
use log::debug;
use rand::prelude::IndexedRandom;

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Vec<Feedback>,
    pub score: usize,
    /// Whether the guess could still have been the answer when played
    pub is_candidate: bool,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Pick a random target from the engine's bank
#[must_use]
pub fn random_target(guesser: &Guesser) -> Option<String> {
    guesser
        .bank()
        .words()
        .choose(&mut rand::rng())
        .map(|w| w.text().to_string())
}

/// Solve `target` from a fresh puzzle, following the engine's top suggestion
///
/// The engine is reset first and left holding the played history.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a word of the engine's bank
/// - The engine runs out of candidates
pub fn solve_word(guesser: &mut Guesser, target: &str) -> Result<SolveResult, GuessError> {
    let target_word = Word::new(target)
        .map_err(|e| GuessError::InvalidRequest(format!("invalid target '{target}': {e}")))?;
    if !guesser.bank().contains(target_word.text()) {
        return Err(GuessError::InvalidRequest(format!(
            "target '{target_word}' is not in the word bank"
        )));
    }

    guesser.reset();
    let max_guesses = guesser.config().max_guesses;
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..max_guesses {
        let candidates_before = guesser.candidate_count();

        let best = guesser
            .ranked_guesses(1)?
            .into_iter()
            .next()
            .ok_or(GuessError::NoCandidatesRemaining)?;
        let guess = Word::new(&best.word)
            .map_err(|e| GuessError::InvalidRequest(e.to_string()))?;

        let feedback = Feedback::score(&guess, &target_word);
        guesser.process_guess(guess.text(), &feedback)?;
        debug!("{target_word}: guessed {guess}, {} candidates left", guesser.candidate_count());

        let solved = is_solved(&feedback);
        guesses.push(GuessStep {
            word: best.word,
            feedback,
            score: best.score,
            is_candidate: best.is_candidate,
            candidates_before,
            candidates_after: guesser.candidate_count(),
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target_word.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target_word.text().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;
    use crate::solver::GuesserConfig;

    fn english() -> Guesser {
        Guesser::for_language(Language::English, GuesserConfig::default()).unwrap()
    }

    #[test]
    fn solve_word_records_shrinking_history() {
        let mut guesser = english();
        let result = solve_word(&mut guesser, "climb").unwrap();

        assert_eq!(result.target, "climb");
        assert!(!result.guesses.is_empty());
        assert!(result.guesses.len() <= 6);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1, "answer was eliminated");
        }
    }

    #[test]
    fn solve_word_success_ends_on_target() {
        let mut guesser = english();
        let result = solve_word(&mut guesser, "crane").unwrap();

        if result.success {
            let last = result.guesses.last().unwrap();
            assert_eq!(last.word, "crane");
            assert!(is_solved(&last.feedback));
        } else {
            assert_eq!(result.guesses.len(), 6);
        }
    }

    #[test]
    fn solve_word_in_hardcore_only_guesses_candidates() {
        let mut guesser =
            Guesser::for_language(Language::English, GuesserConfig::default().hardcore(true))
                .unwrap();
        let result = solve_word(&mut guesser, "tried").unwrap();

        assert!(result.guesses.iter().all(|step| step.is_candidate));
        assert!(result.success || result.guesses.len() == 6);
    }

    #[test]
    fn solve_word_rejects_unknown_target() {
        let mut guesser = english();
        assert!(matches!(
            solve_word(&mut guesser, "zzzzz"),
            Err(GuessError::InvalidRequest(_))
        ));
        assert!(matches!(
            solve_word(&mut guesser, "cr4ne"),
            Err(GuessError::InvalidRequest(_))
        ));
    }

    #[test]
    fn solve_word_respects_max_guesses() {
        let mut guesser =
            Guesser::for_language(Language::English, GuesserConfig::default().max_guesses(2))
                .unwrap();
        let result = solve_word(&mut guesser, "youth").unwrap();
        assert!(result.guesses.len() <= 2);
    }

    #[test]
    fn random_target_comes_from_bank() {
        let guesser = english();
        let target = random_target(&guesser).unwrap();
        assert!(guesser.bank().contains(&target));
    }
}
