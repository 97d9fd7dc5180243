//! Core domain types
//!
//! Words, per-letter feedback and the supported languages. Everything here is
//! pure and independent of the word banks and the engine.

mod feedback;
mod language;
mod word;

pub use feedback::{Feedback, feedback_to_string, is_solved, parse_feedback_line};
pub use language::Language;
pub use word::{Word, WordError};
