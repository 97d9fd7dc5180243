//! Candidate filtering
//!
//! A guess and its feedback are compiled into a `Constraint` once, then
//! checked against every remaining candidate.
//!
//! Duplicate letters follow the usual rules: green and yellow marks each
//! account for one occurrence of their letter, and a gray mark on a letter
//! caps its count at the number of green/yellow marks that letter received
//! in the same guess. A lone gray therefore means "absent", while a gray next
//! to a yellow of the same letter means "exactly one".

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Occurrence bounds for one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LetterCount {
    min: usize,
    /// `None` when no gray caps the count
    max: Option<usize>,
}

/// Compiled filter for one guess/feedback pair
#[derive(Debug, Clone)]
pub(crate) struct Constraint {
    /// Length of the guess; words of any other length never match
    length: usize,
    /// Letters that must sit at a position
    fixed: Vec<(usize, char)>,
    /// Letters that must not sit at a position (yellow and gray marks)
    excluded: Vec<(usize, char)>,
    counts: FxHashMap<char, LetterCount>,
}

impl Constraint {
    /// Build the constraint for a guess and its feedback
    ///
    /// Callers must pass feedback of the same length as the guess.
    #[must_use]
    pub(crate) fn new(guess: &Word, feedback: &[Feedback]) -> Self {
        debug_assert_eq!(guess.len(), feedback.len());

        let mut fixed = Vec::new();
        let mut excluded = Vec::new();
        let mut counts: FxHashMap<char, LetterCount> = FxHashMap::default();

        for (i, (&letter, &mark)) in guess.chars().iter().zip(feedback).enumerate() {
            let entry = counts.entry(letter).or_insert(LetterCount { min: 0, max: None });
            match mark {
                Feedback::Green => {
                    fixed.push((i, letter));
                    entry.min += 1;
                }
                Feedback::Yellow => {
                    excluded.push((i, letter));
                    entry.min += 1;
                }
                Feedback::Gray => {
                    excluded.push((i, letter));
                    entry.max = Some(0);
                }
            }
        }

        for count in counts.values_mut() {
            if count.max.is_some() {
                count.max = Some(count.min);
            }
        }

        Self {
            length: guess.len(),
            fixed,
            excluded,
            counts,
        }
    }

    /// Check whether a word is consistent with this guess's feedback
    #[must_use]
    pub(crate) fn matches(&self, word: &Word) -> bool {
        word.len() == self.length
            && self.fixed.iter().all(|&(i, letter)| word.char_at(i) == letter)
            && self
                .excluded
                .iter()
                .all(|&(i, letter)| word.char_at(i) != letter)
            && self.counts.iter().all(|(&letter, bounds)| {
                let n = word.count_of(letter);
                n >= bounds.min && bounds.max.is_none_or(|max| n <= max)
            })
    }
}
