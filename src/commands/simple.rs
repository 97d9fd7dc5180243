//! Simple interactive CLI mode
//!
//! Prompts for each guess and its feedback, feeds them to the engine and
//! shows the next suggestions.

use crate::core::{Feedback, Word, is_solved, parse_feedback_line};
use crate::output::formatters::{colored_guess, format_suggestions, share_grid};
use crate::solver::{GuessRecord, Guesser};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// How many suggestions to show per turn
const SUGGESTIONS_PER_TURN: usize = 3;

enum Input {
    Guess(String),
    Quit,
    NewGame,
    Undo,
}

/// Run the interactive session until the user quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(guesser: &mut Guesser, mut input: R, out: &mut W) -> Result<()> {
    writeln!(out, "\n{}", "Wordle Buddy - Interactive Mode".bright_cyan().bold())?;
    writeln!(
        out,
        "After each guess, enter the feedback: g (green), y (yellow), w (gray), e.g. 'gywww'."
    )?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new game, 'undo' to drop the last guess\n")?;

    loop {
        show_suggestions(guesser, out)?;

        let word = match read_guess(guesser, &mut input, out)? {
            None | Some(Input::Quit) => {
                writeln!(out, "\n👋 Thanks for playing!")?;
                return Ok(());
            }
            Some(Input::NewGame) => {
                guesser.reset();
                writeln!(out, "\n🔄 New game started!")?;
                continue;
            }
            Some(Input::Undo) => {
                undo(guesser, out)?;
                continue;
            }
            Some(Input::Guess(word)) => word,
        };

        let Some(feedback) = read_feedback(guesser, &mut input, out)? else {
            writeln!(out, "\n👋 Thanks for playing!")?;
            return Ok(());
        };

        guesser.process_guess(&word, &feedback)?;
        writeln!(out, "{}", colored_guess(&word, &feedback))?;

        if is_solved(&feedback) {
            writeln!(
                out,
                "\n{}",
                format!("🎉 Solved in {} guesses!", guesser.attempts().len())
                    .bright_green()
                    .bold()
            )?;
            writeln!(
                out,
                "{}",
                share_grid(guesser.attempts().iter().map(|r| r.feedback.as_slice()))
            )?;
            guesser.reset();
            writeln!(out, "🔄 New game started!")?;
        }
    }
}

fn show_suggestions<W: Write>(guesser: &Guesser, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "────────────────────────────────────────────────────────────"
    )?;
    writeln!(
        out,
        "Attempt {}: {} candidates remaining",
        guesser.attempt_number(),
        guesser.candidate_count()
    )?;

    match guesser.ranked_guesses(SUGGESTIONS_PER_TURN) {
        Ok(suggestions) => {
            write!(out, "{}", format_suggestions(&suggestions))?;
            if guesser.is_solved()
                && let Some(answer) = guesser.candidates().next()
            {
                writeln!(out, "The answer must be {}", answer.text().to_uppercase())?;
            }
        }
        Err(e) => {
            writeln!(out, "❌ {e}")?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.")?;
        }
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn read_guess<R: BufRead, W: Write>(
    guesser: &Guesser,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Input>> {
    loop {
        write!(out, "Enter your guess: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Some(Input::Quit)),
            "new" | "n" => return Ok(Some(Input::NewGame)),
            "undo" | "u" => return Ok(Some(Input::Undo)),
            _ => {}
        }

        match Word::new(&line) {
            Ok(word) if word.len() == guesser.bank().word_length() => {
                if !guesser.bank().contains(word.text()) {
                    writeln!(out, "(note: '{word}' is not in the word bank)")?;
                }
                return Ok(Some(Input::Guess(word.text().to_string())));
            }
            _ => writeln!(
                out,
                "❌ '{line}' is not a {}-letter word, please try again",
                guesser.bank().word_length()
            )?,
        }
    }
}

fn read_feedback<R: BufRead, W: Write>(
    guesser: &Guesser,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Vec<Feedback>>> {
    let length = guesser.bank().word_length();
    loop {
        write!(out, "Enter feedback (g/y/w, or 'win'): ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        if matches!(line.to_lowercase().as_str(), "win" | "correct" | "solved") {
            return Ok(Some(vec![Feedback::Green; length]));
        }

        match parse_feedback_line(&line) {
            Ok(feedback) if feedback.len() == length => return Ok(Some(feedback)),
            Ok(_) => writeln!(out, "❌ Feedback needs exactly {length} marks")?,
            Err(e) => writeln!(out, "❌ {e}")?,
        }
    }
}

/// Drop the last guess by replaying the rest of the history
fn undo<W: Write>(guesser: &mut Guesser, out: &mut W) -> Result<()> {
    let mut history: Vec<GuessRecord> = guesser.attempts().to_vec();
    if history.pop().is_none() {
        writeln!(out, "Nothing to undo!")?;
        return Ok(());
    }

    guesser.reset();
    let guesses: Vec<&str> = history.iter().map(|r| r.guess.text()).collect();
    let feedbacks: Vec<Vec<Feedback>> = history.iter().map(|r| r.feedback.clone()).collect();
    guesser.process_guesses(&guesses, &feedbacks)?;

    writeln!(out, "✓ Undone! Back to attempt {}", guesser.attempt_number())?;
    Ok(())
}
