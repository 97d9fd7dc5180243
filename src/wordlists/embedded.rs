//! Embedded word lists
//!
//! Word lists compiled into the binary, one newline-delimited file per language.

use crate::core::Language;

const ENGLISH: &str = include_str!("../../data/english.txt");
const GERMAN: &str = include_str!("../../data/german.txt");
const AUSTRIAN: &str = include_str!("../../data/austrian.txt");
const SPANISH: &str = include_str!("../../data/spanish.txt");

/// Raw newline-delimited list for a language
#[must_use]
pub const fn source(language: Language) -> &'static str {
    match language {
        Language::English => ENGLISH,
        Language::German => GERMAN,
        Language::Austrian => AUSTRIAN,
        Language::Spanish => SPANISH,
    }
}
