//! Word bank loading
//!
//! A `WordBank` is the immutable, ordered list of same-length words for one
//! language. It can come from the embedded lists or from a custom file.

use super::embedded;
use crate::core::{Language, Word};
use crate::error::GuessError;
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Ordered, fixed-length word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<Word>,
    word_length: usize,
    language: Option<Language>,
}

impl WordBank {
    /// Load the embedded bank for a language
    ///
    /// # Errors
    ///
    /// Returns `GuessError::BankLoadError` if the embedded list is malformed.
    ///
    /// # Examples
    /// ```
    /// use wordle_buddy::core::Language;
    /// use wordle_buddy::wordlists::WordBank;
    ///
    /// let bank = WordBank::load(Language::English).unwrap();
    /// assert_eq!(bank.word_length(), 5);
    /// assert!(bank.contains("crane"));
    /// ```
    pub fn load(language: Language) -> Result<Self, GuessError> {
        let bank = Self::parse(embedded::source(language), Some(language))?;
        info!("Loaded {} {} words", bank.len(), language);
        Ok(bank)
    }

    /// Load the embedded bank for a language given by name
    ///
    /// # Errors
    ///
    /// Returns `GuessError::UnsupportedLanguage` if the name does not match a
    /// known language, or `GuessError::BankLoadError` if its list is malformed.
    pub fn from_name(name: &str) -> Result<Self, GuessError> {
        Self::load(name.parse()?)
    }

    /// Load a newline-delimited bank from a file
    ///
    /// # Errors
    ///
    /// Returns `GuessError::BankLoadError` if the file cannot be read or its
    /// content is not a valid bank.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GuessError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GuessError::BankLoadError(format!("cannot read '{}': {e}", path.display()))
        })?;

        let bank = Self::parse(&content, None)?;
        info!("Loaded {} words from {}", bank.len(), path.display());
        Ok(bank)
    }

    /// Parse newline-delimited text into a bank
    ///
    /// Lines are trimmed and lowercased and blank lines are skipped. The first
    /// word fixes the bank's word length.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::BankLoadError` if no words remain, if a line is not
    /// a valid word, or if a line's length differs from the first word's.
    pub fn parse(text: &str, language: Option<Language>) -> Result<Self, GuessError> {
        let mut words = Vec::new();
        let mut word_length = None;

        for (line_no, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let word = Word::new(trimmed).map_err(|e| {
                GuessError::BankLoadError(format!("line {}: '{trimmed}': {e}", line_no + 1))
            })?;

            let expected = *word_length.get_or_insert(word.len());
            if word.len() != expected {
                return Err(GuessError::BankLoadError(format!(
                    "line {}: '{}' has {} letters, expected {expected}",
                    line_no + 1,
                    word.text(),
                    word.len()
                )));
            }

            words.push(word);
        }

        let Some(word_length) = word_length else {
            return Err(GuessError::BankLoadError(
                "word list is empty".to_string(),
            ));
        };

        let distinct: FxHashSet<&str> = words.iter().map(Word::text).collect();
        if distinct.len() != words.len() {
            debug!(
                "Word list contains {} duplicate entries",
                words.len() - distinct.len()
            );
        }

        Ok(Self {
            words,
            word_length,
            language,
        })
    }

    /// All words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of letters in every word of the bank
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Language the bank was loaded for, if it came from an embedded list
    #[inline]
    #[must_use]
    pub const fn language(&self) -> Option<Language> {
        self.language
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Position of the first occurrence of a word (case-insensitive)
    #[must_use]
    pub fn position(&self, text: &str) -> Option<usize> {
        let wanted = text.trim().to_lowercase();
        self.words.iter().position(|w| w.text() == wanted)
    }

    /// Check whether a word is in the bank (case-insensitive)
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.position(text).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_words() {
        let bank = WordBank::parse("  CRANE\nslate \n\nIrate\n", None).unwrap();

        assert_eq!(bank.len(), 3);
        assert_eq!(bank.word_length(), 5);
        assert_eq!(bank.words()[0].text(), "crane");
        assert_eq!(bank.words()[2].text(), "irate");
        assert_eq!(bank.language(), None);
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            WordBank::parse("", None),
            Err(GuessError::BankLoadError(_))
        ));
        assert!(matches!(
            WordBank::parse("\n   \n", None),
            Err(GuessError::BankLoadError(_))
        ));
    }

    #[test]
    fn parse_rejects_inconsistent_lengths() {
        let err = WordBank::parse("crane\nslate\ncranes\n", None).unwrap_err();
        match err {
            GuessError::BankLoadError(msg) => assert!(msg.contains("line 3")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_non_words() {
        assert!(matches!(
            WordBank::parse("crane\ncr4ne\n", None),
            Err(GuessError::BankLoadError(_))
        ));
    }

    #[test]
    fn parse_keeps_duplicates() {
        let bank = WordBank::parse("crane\ncrane\n", None).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.position("crane"), Some(0));
    }

    #[test]
    fn parse_supports_other_lengths() {
        let bank = WordBank::parse("cat\ndog\n", None).unwrap();
        assert_eq!(bank.word_length(), 3);
    }

    #[test]
    fn every_embedded_language_loads() {
        for language in Language::ALL {
            let bank = WordBank::load(language).unwrap();
            assert!(!bank.is_empty(), "{language} bank is empty");
            assert_eq!(bank.word_length(), 5);
            assert_eq!(bank.language(), Some(language));
        }
    }

    #[test]
    fn from_name_rejects_unknown_language() {
        assert_eq!(
            WordBank::from_name("french"),
            Err(GuessError::UnsupportedLanguage("french".to_string()))
        );
        assert!(WordBank::from_name("Spanish").is_ok());
    }

    /// A temp path unique to this process and test
    fn temp_bank_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "wordle_buddy_{}_{name}.txt",
            std::process::id()
        ))
    }

    #[test]
    fn from_file_reads_and_validates() {
        let good = temp_bank_path("from_file_good");
        let bad = temp_bank_path("from_file_bad");
        fs::write(&good, "crane\nslate\n").unwrap();
        fs::write(&bad, "crane\nsla\n").unwrap();

        let bank = WordBank::from_file(&good).unwrap();
        assert_eq!(bank.len(), 2);
        assert!(matches!(
            WordBank::from_file(&bad),
            Err(GuessError::BankLoadError(_))
        ));

        fs::remove_file(&good).unwrap();
        fs::remove_file(&bad).unwrap();
    }

    #[test]
    fn from_file_missing_is_load_error() {
        assert!(matches!(
            WordBank::from_file("/definitely/not/here/words.txt"),
            Err(GuessError::BankLoadError(_))
        ));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let bank = WordBank::parse("crane\nslate\n", None).unwrap();
        assert!(bank.contains("SLATE"));
        assert_eq!(bank.position("Slate"), Some(1));
        assert!(!bank.contains("irate"));
        assert_eq!(bank.words()[0].text(), "crane");
    }
}
