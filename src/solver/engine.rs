//! Main guess engine

use super::config::GuesserConfig;
use super::constraint::Constraint;
use super::scorer::{self, ScoredGuess};
use crate::core::{Feedback, Language, Word, feedback_to_string};
use crate::error::GuessError;
use crate::wordlists::WordBank;
use log::debug;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// A processed guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub feedback: Vec<Feedback>,
}

/// Guess engine for one puzzle at a time
///
/// Owns its history and candidate set; the word bank is shared read-only.
/// Guesses accumulate until `reset` starts a new puzzle.
pub struct Guesser {
    bank: Arc<WordBank>,
    config: GuesserConfig,
    attempts: Vec<GuessRecord>,
    /// Bank positions of the words still consistent with every attempt
    candidates: Vec<usize>,
}

impl Guesser {
    /// Create an engine over a loaded bank
    ///
    /// # Errors
    ///
    /// Returns `GuessError::InvalidConfig` if the configuration is invalid.
    pub fn new(bank: Arc<WordBank>, config: GuesserConfig) -> Result<Self, GuessError> {
        config.validate()?;
        let candidates = (0..bank.len()).collect();
        Ok(Self {
            bank,
            config,
            attempts: Vec::new(),
            candidates,
        })
    }

    /// Load the embedded bank for `language` and create an engine over it
    ///
    /// # Errors
    ///
    /// Returns `GuessError::BankLoadError` if the bank fails to load, or
    /// `GuessError::InvalidConfig` if the configuration is invalid.
    ///
    /// # Examples
    /// ```
    /// use wordle_buddy::core::{Feedback, Language};
    /// use wordle_buddy::solver::{Guesser, GuesserConfig};
    ///
    /// let mut guesser = Guesser::for_language(Language::English, GuesserConfig::default()).unwrap();
    /// guesser
    ///     .process_guesses(&["crane"], &[vec![Feedback::Gray; 5]])
    ///     .unwrap();
    /// let best = guesser.best_guess(3).unwrap();
    /// assert!(best.len() <= 3);
    /// ```
    pub fn for_language(language: Language, config: GuesserConfig) -> Result<Self, GuessError> {
        Self::new(Arc::new(WordBank::load(language)?), config)
    }

    /// Record guesses and their feedback, narrowing the candidate set
    ///
    /// The whole batch is validated before anything is applied, so an error
    /// leaves the engine untouched.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::MalformedFeedback` if the number of guesses and
    /// feedback sequences differ, or if any guess or feedback sequence does
    /// not match the bank's word length.
    pub fn process_guesses<S: AsRef<str>>(
        &mut self,
        guesses: &[S],
        feedbacks: &[Vec<Feedback>],
    ) -> Result<(), GuessError> {
        if guesses.len() != feedbacks.len() {
            return Err(GuessError::MalformedFeedback(format!(
                "{} guesses but {} feedback sequences",
                guesses.len(),
                feedbacks.len()
            )));
        }

        let length = self.bank.word_length();
        let records = guesses
            .iter()
            .zip(feedbacks)
            .map(|(guess, feedback)| {
                let guess = guess.as_ref();
                let word = Word::new(guess).map_err(|e| {
                    GuessError::MalformedFeedback(format!("guess '{guess}': {e}"))
                })?;
                if word.len() != length {
                    return Err(GuessError::MalformedFeedback(format!(
                        "guess '{word}' has {} letters, expected {length}",
                        word.len()
                    )));
                }
                if feedback.len() != length {
                    return Err(GuessError::MalformedFeedback(format!(
                        "feedback for '{word}' has {} marks, expected {length}",
                        feedback.len()
                    )));
                }
                Ok(GuessRecord {
                    guess: word,
                    feedback: feedback.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for record in records {
            self.apply(record);
        }
        Ok(())
    }

    /// Record a single guess and its feedback
    ///
    /// # Errors
    ///
    /// See [`Guesser::process_guesses`].
    pub fn process_guess(&mut self, guess: &str, feedback: &[Feedback]) -> Result<(), GuessError> {
        self.process_guesses(&[guess], &[feedback.to_vec()])
    }

    fn apply(&mut self, record: GuessRecord) {
        let constraint = Constraint::new(&record.guess, &record.feedback);
        let before = self.candidates.len();
        let words = self.bank.words();
        self.candidates.retain(|&i| constraint.matches(&words[i]));

        debug!(
            "Applied {} ({}): {} -> {} candidates",
            record.guess,
            feedback_to_string(&record.feedback),
            before,
            self.candidates.len()
        );
        self.attempts.push(record);
    }

    /// Up to `num_best_guesses` suggestions, best first
    ///
    /// # Errors
    ///
    /// Returns `GuessError::InvalidRequest` if `num_best_guesses` is zero, or
    /// `GuessError::NoCandidatesRemaining` if no candidate survives.
    pub fn best_guess(&self, num_best_guesses: usize) -> Result<Vec<String>, GuessError> {
        Ok(self
            .ranked_guesses(num_best_guesses)?
            .into_iter()
            .map(|g| g.word)
            .collect())
    }

    /// Like [`Guesser::best_guess`], with scores and candidate flags
    ///
    /// # Errors
    ///
    /// Same as [`Guesser::best_guess`].
    pub fn ranked_guesses(&self, num_best_guesses: usize) -> Result<Vec<ScoredGuess>, GuessError> {
        if num_best_guesses == 0 {
            return Err(GuessError::InvalidRequest(
                "num_best_guesses must be at least 1".to_string(),
            ));
        }
        if self.candidates.is_empty() {
            return Err(GuessError::NoCandidatesRemaining);
        }

        let probes: Vec<usize>;
        let pool = if self.restrict_to_candidates() {
            &self.candidates
        } else {
            // a word already played (and not solved) tells us nothing new
            let played: FxHashSet<&str> = self.attempts.iter().map(|r| r.guess.text()).collect();
            probes = (0..self.bank.len())
                .filter(|&i| !played.contains(self.bank.words()[i].text()))
                .collect();
            &probes
        };

        Ok(scorer::rank(
            self.bank.words(),
            pool,
            &self.candidates,
            num_best_guesses,
        ))
    }

    /// Whether suggestions must come from the candidate set
    ///
    /// Always in hardcore mode; otherwise once probing can no longer pay off,
    /// i.e. with two or fewer candidates or on the final attempt.
    fn restrict_to_candidates(&self) -> bool {
        self.config.hardcore
            || self.candidates.len() <= 2
            || self.attempt_number() >= self.config.max_guesses
    }

    /// Forget all guesses and restore the full candidate set
    pub fn reset(&mut self) {
        self.attempts.clear();
        self.candidates = (0..self.bank.len()).collect();
    }

    /// Switch between suggesting from the candidates only or the whole bank
    pub fn set_hardcore(&mut self, hardcore: bool) {
        self.config.hardcore = hardcore;
    }

    /// Words still consistent with every guess, in bank order
    pub fn candidates(&self) -> impl Iterator<Item = &Word> + '_ {
        self.candidates.iter().map(|&i| &self.bank.words()[i])
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// True once exactly one candidate remains
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }

    #[must_use]
    pub fn attempts(&self) -> &[GuessRecord] {
        &self.attempts
    }

    /// Number of the attempt about to be made (1-based)
    #[must_use]
    pub fn attempt_number(&self) -> usize {
        self.attempts.len() + 1
    }

    #[must_use]
    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub const fn config(&self) -> &GuesserConfig {
        &self.config
    }
}
