//! Wordle Buddy
//!
//! A Wordle helper: report your guesses and their feedback, and it narrows the
//! word bank to the words that can still be the answer and ranks next guesses
//! by how common their letters are among those candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_buddy::core::{Language, parse_feedback_line};
//! use wordle_buddy::solver::{Guesser, GuesserConfig};
//!
//! let mut guesser = Guesser::for_language(Language::English, GuesserConfig::default()).unwrap();
//!
//! let feedback = parse_feedback_line("wywww").unwrap();
//! guesser.process_guesses(&["crane"], &[feedback]).unwrap();
//!
//! for word in guesser.best_guess(3).unwrap() {
//!     println!("{word}");
//! }
//! ```

// Core domain types
pub mod core;

// Error type
pub mod error;

// Guess engine
pub mod solver;

// Word banks
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::GuessError;
