//! Per-letter feedback
//!
//! Each letter of a guess is marked:
//! - Green: right letter, right position
//! - Yellow: letter is in the word, but elsewhere
//! - Gray: no (further) occurrence of the letter in the word

use super::Word;
use crate::error::GuessError;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Green,
    Yellow,
    Gray,
}

impl Feedback {
    /// Single-character shorthand as typed in the terminal
    #[must_use]
    pub const fn shorthand(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Yellow => 'y',
            Self::Gray => 'w',
        }
    }

    /// Parse a shorthand character
    ///
    /// Accepts:
    /// - 'g'/'G'/🟩 for green
    /// - 'y'/'Y'/🟨 for yellow
    /// - 'w'/'W'/'x'/'X'/'-'/'_'/⬜ for gray
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'g' | 'G' | '🟩' => Some(Self::Green),
            'y' | 'Y' | '🟨' => Some(Self::Yellow),
            'w' | 'W' | 'x' | 'X' | '-' | '_' | '⬜' => Some(Self::Gray),
            _ => None,
        }
    }

    /// Compute honest feedback for `guess` against a known `target`
    ///
    /// Greens are assigned first and consume their letter; yellows are then
    /// handed out left to right while unmatched occurrences remain.
    ///
    /// Both words must have the same length.
    ///
    /// # Examples
    /// ```
    /// use wordle_buddy::core::{Feedback, Word, feedback_to_string};
    ///
    /// let guess = Word::new("abbey").unwrap();
    /// let target = Word::new("abide").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    /// assert_eq!(feedback_to_string(&feedback), "ggwyw");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Vec<Self> {
        debug_assert_eq!(guess.len(), target.len(), "words must share a length");

        let mut result = vec![Self::Gray; guess.len()];
        let mut available = target.char_counts();

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = Self::Green;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Self::Green {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = Self::Yellow;
                *count -= 1;
            }
        }

        result
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Feedback {
    type Err = GuessError;

    /// Parse the long-form names `"green"`, `"yellow"` and `"gray"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "gray" | "grey" | "white" => Ok(Self::Gray),
            other => Err(GuessError::MalformedFeedback(format!(
                "unknown feedback '{other}', expected green, yellow or gray"
            ))),
        }
    }
}

/// Strictly parse a shorthand feedback line such as `"gywww"`
///
/// Whitespace around the line is ignored. Every remaining character must be a
/// recognised shorthand, otherwise the whole line is rejected.
///
/// # Errors
/// Returns `GuessError::MalformedFeedback` for an empty line or an unknown
/// character.
///
/// # Examples
/// ```
/// use wordle_buddy::core::{Feedback, parse_feedback_line};
///
/// let fb = parse_feedback_line("GYwW-").unwrap();
/// assert_eq!(fb[0], Feedback::Green);
/// assert_eq!(fb[1], Feedback::Yellow);
/// assert!(parse_feedback_line("gyqww").is_err());
/// ```
pub fn parse_feedback_line(line: &str) -> Result<Vec<Feedback>, GuessError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(GuessError::MalformedFeedback(
            "feedback line is empty".to_string(),
        ));
    }

    line.chars()
        .map(|ch| {
            Feedback::from_char(ch).ok_or_else(|| {
                GuessError::MalformedFeedback(format!(
                    "invalid feedback character '{ch}', use g (green), y (yellow) or w (gray)"
                ))
            })
        })
        .collect()
}

/// Render feedback back into shorthand, e.g. `"gywww"`
#[must_use]
pub fn feedback_to_string(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.shorthand()).collect()
}

/// True when every position is green
#[must_use]
pub fn is_solved(feedback: &[Feedback]) -> bool {
    !feedback.is_empty() && feedback.iter().all(|&f| f == Feedback::Green)
}
