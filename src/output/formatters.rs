//! Formatting utilities for terminal output

use crate::core::Feedback;
use crate::solver::ScoredGuess;
use colored::Colorize;
use std::fmt::Write;

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &[Feedback]) -> String {
    feedback
        .iter()
        .map(|f| match f {
            Feedback::Green => '🟩',
            Feedback::Yellow => '🟨',
            Feedback::Gray => '⬜',
        })
        .collect()
}

/// One emoji row per guess, as shared after a game
#[must_use]
pub fn share_grid<'a>(rows: impl IntoIterator<Item = &'a [Feedback]>) -> String {
    rows.into_iter()
        .map(feedback_to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a guess with each letter tinted by its feedback
#[must_use]
pub fn colored_guess(word: &str, feedback: &[Feedback]) -> String {
    word.to_uppercase()
        .chars()
        .zip(feedback)
        .map(|(ch, f)| {
            let cell = format!(" {ch} ");
            match f {
                Feedback::Green => cell.black().on_green().to_string(),
                Feedback::Yellow => cell.black().on_yellow().to_string(),
                Feedback::Gray => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// One numbered line per suggestion, candidates marked
#[must_use]
pub fn format_suggestions(suggestions: &[ScoredGuess]) -> String {
    let mut out = String::new();
    for (i, guess) in suggestions.iter().enumerate() {
        let kind = if guess.is_candidate {
            "candidate".green()
        } else {
            "probe".bright_black()
        };
        let _ = writeln!(
            out,
            "  {}. {} (score {}) [{kind}]",
            i + 1,
            guess.word.to_uppercase().bright_white().bold(),
            guess.score
        );
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Gray, Green, Yellow};

    #[test]
    fn feedback_to_emoji_mixed() {
        assert_eq!(
            feedback_to_emoji(&[Green, Yellow, Gray, Gray, Green]),
            "🟩🟨⬜⬜🟩"
        );
    }

    #[test]
    fn share_grid_one_row_per_guess() {
        let first = [Gray, Yellow, Gray, Gray, Gray];
        let second = [Green; 5];
        assert_eq!(
            share_grid([&first[..], &second[..]]),
            "⬜🟨⬜⬜⬜\n🟩🟩🟩🟩🟩"
        );
        assert_eq!(share_grid(std::iter::empty::<&[Feedback]>()), "");
    }

    #[test]
    fn colored_guess_keeps_letters() {
        colored::control::set_override(false);
        assert_eq!(
            colored_guess("abc", &[Green, Yellow, Gray]),
            " A  B  C "
        );
    }

    #[test]
    fn format_suggestions_numbers_lines() {
        colored::control::set_override(false);
        let suggestions = vec![
            ScoredGuess {
                word: "slate".to_string(),
                score: 12,
                is_candidate: true,
            },
            ScoredGuess {
                word: "crane".to_string(),
                score: 9,
                is_candidate: false,
            },
        ];
        let text = format_suggestions(&suggestions);
        assert_eq!(
            text,
            "  1. SLATE (score 12) [candidate]\n  2. CRANE (score 9) [probe]\n"
        );
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(create_progress_bar(0.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(100.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(create_progress_bar(5.0, 0.0, 2), "░░");
    }
}
