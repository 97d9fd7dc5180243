//! Word representation
//!
//! A Word stores a fixed-length word along with letter position indices for
//! feedback calculation and filtering. Length is measured in characters so
//! that umlauts and `ñ` count as single letters.

use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacters => write!(f, "Word must contain only letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty or contains anything
    /// other than alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_buddy::core::Word;
    ///
    /// let word = Word::new(" Crane ").unwrap();
    /// assert_eq!(word.text(), "crane");
    /// assert_eq!(Word::new("größe").unwrap().len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: Vec<char> = text.chars().collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Number of times a letter occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.positions_of(letter).len()
    }

    /// Iterate over the distinct letters of the word
    pub fn distinct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.char_positions.keys().copied()
    }

    /// Get the count of each letter in the word
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<char, usize> {
        self.char_positions
            .iter()
            .map(|(&ch, positions)| (ch, positions.len()))
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), &['c', 'r', 'a', 'n', 'e']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("  CrAnE\t").unwrap().text(), "crane");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_length_counts_letters_not_bytes() {
        let word = Word::new("GRÜßE").unwrap();
        assert_eq!(word.text(), "grüße");
        assert_eq!(word.len(), 5);
        assert_eq!(word.char_at(2), 'ü');

        assert_eq!(Word::new("niñas").unwrap().len(), 5);
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.positions_of('e'), &[2, 3]);
        assert_eq!(word.positions_of('s'), &[0]);
        assert_eq!(word.positions_of('z'), &[] as &[usize]);
        assert_eq!(word.count_of('e'), 2);
        assert_eq!(word.count_of('z'), 0);
    }

    #[test]
    fn word_distinct_letters() {
        let word = Word::new("abbey").unwrap();
        let mut letters: Vec<char> = word.distinct_letters().collect();
        letters.sort_unstable();
        assert_eq!(letters, vec!['a', 'b', 'e', 'y']);
    }

    #[test]
    fn word_char_counts() {
        let counts = Word::new("aaaaa").unwrap().char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&'a'), Some(&5));
    }

    #[test]
    fn word_display_and_equality() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
        assert_eq!(word, Word::new("CRANE").unwrap());
        assert_ne!(word, Word::new("slate").unwrap());
    }
}
