//! Letter-frequency ranking
//!
//! Candidates vote once for every distinct letter they contain. A guess scores
//! the sum of the votes of its distinct letters, so words covering letters
//! common among the remaining candidates float to the top.

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Letter presence counts across a candidate set
#[derive(Debug, Clone, Default)]
pub struct LetterFrequencyTable {
    counts: FxHashMap<char, usize>,
}

impl LetterFrequencyTable {
    /// Count, for each letter, how many candidates contain it at least once
    ///
    /// # Examples
    /// ```
    /// use wordle_buddy::core::Word;
    /// use wordle_buddy::solver::LetterFrequencyTable;
    ///
    /// let words = [Word::new("abbey").unwrap(), Word::new("abide").unwrap()];
    /// let table = LetterFrequencyTable::build(words.iter());
    /// assert_eq!(table.count('b'), 2);
    /// assert_eq!(table.count('y'), 1);
    /// assert_eq!(table.score(&Word::new("bobby").unwrap()), 3);
    /// ```
    pub fn build<'a>(candidates: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for word in candidates {
            for letter in word.distinct_letters() {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Number of candidates containing `letter`
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Sum of the counts of the word's distinct letters
    #[must_use]
    pub fn score(&self, word: &Word) -> usize {
        word.distinct_letters().map(|letter| self.count(letter)).sum()
    }
}

/// A ranked suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    pub word: String,
    pub score: usize,
    /// Whether the word could still be the answer
    pub is_candidate: bool,
}

/// Rank a pool of bank positions against the candidate set
///
/// `pool` and `candidates` hold positions into `words`. Words sharing no
/// letter with any candidate score zero and are left out. The result is
/// ordered by descending score, ties broken by ascending bank position, and
/// truncated to `limit` entries.
#[must_use]
pub fn rank(words: &[Word], pool: &[usize], candidates: &[usize], limit: usize) -> Vec<ScoredGuess> {
    let table = LetterFrequencyTable::build(candidates.iter().map(|&i| &words[i]));
    let candidate_set: FxHashSet<usize> = candidates.iter().copied().collect();

    let mut scored: Vec<(usize, usize)> = pool
        .iter()
        .map(|&index| (index, table.score(&words[index])))
        .filter(|&(_, score)| score > 0)
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    scored
        .into_iter()
        .take(limit)
        .map(|(index, score)| ScoredGuess {
            word: words[index].text().to_string(),
            score,
            is_candidate: candidate_set.contains(&index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn table_counts_presence_not_occurrences() {
        let bank = words(&["speed", "erase", "level"]);
        let table = LetterFrequencyTable::build(bank.iter());

        assert_eq!(table.count('e'), 3);
        assert_eq!(table.count('s'), 2);
        assert_eq!(table.count('l'), 1);
        assert_eq!(table.count('z'), 0);
    }

    #[test]
    fn repeated_letters_count_once_in_score() {
        let bank = words(&["speed", "erase", "level"]);
        let table = LetterFrequencyTable::build(bank.iter());

        // s(2) + p(1) + e(3) + d(1)
        assert_eq!(table.score(&bank[0]), 7);
        // l(1) + e(3) + v(1)
        assert_eq!(table.score(&bank[2]), 5);
    }

    #[test]
    fn rank_orders_by_score_then_bank_position() {
        let bank = words(&["abcde", "edcba", "fghij", "aaaaa"]);
        let all: Vec<usize> = (0..bank.len()).collect();

        let ranked = rank(&bank, &all, &all, 10);
        let order: Vec<&str> = ranked.iter().map(|g| g.word.as_str()).collect();

        // abcde and edcba tie; abcde comes first in the bank
        assert_eq!(order, vec!["abcde", "edcba", "fghij", "aaaaa"]);
        assert_eq!(ranked[0].score, ranked[1].score);
    }

    #[test]
    fn rank_truncates_and_flags_candidates() {
        let bank = words(&["crane", "slate", "zzzzz"]);
        let pool = vec![0, 1, 2];
        let candidates = vec![1];

        let ranked = rank(&bank, &pool, &candidates, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].word, "slate");
        assert!(ranked[0].is_candidate);
        assert_eq!(ranked[1].word, "crane");
        assert!(!ranked[1].is_candidate);
    }

    #[test]
    fn rank_drops_words_sharing_no_letter() {
        let bank = words(&["crane", "slate", "zzzzz", "moody"]);
        let pool = vec![0, 1, 2, 3];
        let candidates = vec![1];

        let ranked = rank(&bank, &pool, &candidates, 10);
        let order: Vec<&str> = ranked.iter().map(|g| g.word.as_str()).collect();

        assert_eq!(order, vec!["slate", "crane"]);
        assert!(ranked.iter().all(|g| g.score > 0));
    }
}
