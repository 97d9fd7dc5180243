//! Error type shared by the word bank loader and the guess engine

use std::fmt;

/// Everything that can go wrong while loading a bank or working a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The language selector has no backing word list
    UnsupportedLanguage(String),
    /// The word list is missing, empty or has inconsistent word lengths
    BankLoadError(String),
    /// Guess/feedback counts or lengths do not line up with the bank
    MalformedFeedback(String),
    /// Filtering removed every candidate
    NoCandidatesRemaining,
    /// A query argument is out of range
    InvalidRequest(String),
    /// Engine configuration is out of range
    InvalidConfig(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLanguage(lang) => {
                write!(f, "Unsupported language '{lang}'")
            }
            Self::BankLoadError(msg) => write!(f, "Failed to load word bank: {msg}"),
            Self::MalformedFeedback(msg) => write!(f, "Malformed feedback: {msg}"),
            Self::NoCandidatesRemaining => {
                write!(f, "No candidates remain; the feedback may be contradictory")
            }
            Self::InvalidRequest(msg) => write!(f, "Invalid request: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for GuessError {}
