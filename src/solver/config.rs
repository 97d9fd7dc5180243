//! Engine tunables

use crate::error::GuessError;
use log::warn;

/// Conventional number of attempts in a game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Configuration for a `Guesser`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuesserConfig {
    /// Only suggest words that can still be the answer
    pub hardcore: bool,
    /// Attempts allowed per puzzle; the final attempt only suggests candidates
    pub max_guesses: usize,
}

impl Default for GuesserConfig {
    fn default() -> Self {
        Self {
            hardcore: false,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

impl GuesserConfig {
    #[must_use]
    pub const fn hardcore(mut self, hardcore: bool) -> Self {
        self.hardcore = hardcore;
        self
    }

    #[must_use]
    pub const fn max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Check the configuration
    ///
    /// # Errors
    ///
    /// Returns `GuessError::InvalidConfig` if `max_guesses` is zero.
    pub fn validate(&self) -> Result<(), GuessError> {
        if self.max_guesses == 0 {
            return Err(GuessError::InvalidConfig(
                "max_guesses must be a positive integer".to_string(),
            ));
        }
        if self.max_guesses != DEFAULT_MAX_GUESSES {
            warn!(
                "max_guesses is {}, which differs from the conventional {DEFAULT_MAX_GUESSES}",
                self.max_guesses
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_relaxed_six_guesses() {
        let config = GuesserConfig::default();
        assert!(!config.hardcore);
        assert_eq!(config.max_guesses, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders_set_fields() {
        let config = GuesserConfig::default().hardcore(true).max_guesses(8);
        assert!(config.hardcore);
        assert_eq!(config.max_guesses, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_guesses_is_invalid() {
        let config = GuesserConfig::default().max_guesses(0);
        assert!(matches!(
            config.validate(),
            Err(GuessError::InvalidConfig(_))
        ));
    }
}
