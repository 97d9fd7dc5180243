//! Supported word bank languages

use crate::error::GuessError;
use std::fmt;
use std::str::FromStr;

/// A language with an embedded word bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Language {
    English,
    German,
    Austrian,
    Spanish,
}

impl Language {
    /// Every language with a backing word list
    pub const ALL: [Self; 4] = [Self::English, Self::German, Self::Austrian, Self::Spanish];

    /// Lowercase selector name, e.g. `"english"`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::German => "german",
            Self::Austrian => "austrian",
            Self::Spanish => "spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.name() == wanted)
            .ok_or(GuessError::UnsupportedLanguage(wanted))
    }
}
