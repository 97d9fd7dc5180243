//! Guess engine
//!
//! Filters the word bank down to the words consistent with every guess and
//! ranks next guesses by letter frequency among the survivors.

mod config;
mod constraint;
mod engine;
mod scorer;

pub use config::{DEFAULT_MAX_GUESSES, GuesserConfig};
pub use engine::{GuessRecord, Guesser};
pub use scorer::{LetterFrequencyTable, ScoredGuess, rank};
