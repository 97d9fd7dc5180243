//! One-shot suggestion command
//!
//! Feeds a batch of guesses and feedback to the engine and returns its top
//! suggestions.

use crate::core::{Feedback, parse_feedback_line};
use crate::error::GuessError;
use crate::solver::{Guesser, ScoredGuess};

/// Parse feedback given either as shorthand (`gywww`) or as comma-separated
/// names (`green,yellow,gray,gray,gray`)
///
/// # Errors
///
/// Returns `GuessError::MalformedFeedback` for any unrecognised mark.
pub fn parse_feedback_arg(arg: &str) -> Result<Vec<Feedback>, GuessError> {
    if arg.contains(',') {
        arg.split(',').map(str::parse).collect()
    } else {
        parse_feedback_line(arg)
    }
}

/// Process `guesses` with their `feedbacks` and rank the next guesses
///
/// # Errors
///
/// Returns an error if the feedback is malformed, if the counts differ, or if
/// no candidates remain.
pub fn suggest(
    guesser: &mut Guesser,
    guesses: &[String],
    feedbacks: &[String],
    count: usize,
) -> Result<Vec<ScoredGuess>, GuessError> {
    let feedbacks = feedbacks
        .iter()
        .map(|f| parse_feedback_arg(f))
        .collect::<Result<Vec<_>, _>>()?;

    guesser.process_guesses(guesses, &feedbacks)?;
    guesser.ranked_guesses(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GuesserConfig;
    use crate::wordlists::WordBank;
    use Feedback::{Gray, Green, Yellow};
    use std::sync::Arc;

    fn small_guesser() -> Guesser {
        let bank = WordBank::parse("crane\ncrimp\nclimb\ntried", None).unwrap();
        Guesser::new(Arc::new(bank), GuesserConfig::default()).unwrap()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn parse_feedback_arg_both_forms() {
        assert_eq!(
            parse_feedback_arg("gyw").unwrap(),
            vec![Green, Yellow, Gray]
        );
        assert_eq!(
            parse_feedback_arg("green, yellow,gray").unwrap(),
            vec![Green, Yellow, Gray]
        );
        assert!(parse_feedback_arg("green,blue").is_err());
    }

    #[test]
    fn suggest_narrows_and_ranks() {
        let mut guesser = small_guesser();
        let ranked = suggest(
            &mut guesser,
            &strings(&["crimp"]),
            &strings(&["gwggw"]),
            3,
        )
        .unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word, "climb");
        assert!(ranked[0].is_candidate);
    }

    #[test]
    fn suggest_rejects_mismatched_counts() {
        let mut guesser = small_guesser();
        let result = suggest(&mut guesser, &strings(&["crimp", "crane"]), &strings(&["gwggw"]), 3);
        assert!(matches!(result, Err(GuessError::MalformedFeedback(_))));
        assert_eq!(guesser.candidate_count(), 4);
    }

    #[test]
    fn suggest_reports_contradictions() {
        let mut guesser = small_guesser();
        let result = suggest(
            &mut guesser,
            &strings(&["crimp"]),
            &strings(&["gray,green,green,gray,yellow"]),
            3,
        );
        assert_eq!(result, Err(GuessError::NoCandidatesRemaining));
    }
}
