//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, format_suggestions, share_grid};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::solver::ScoredGuess;
use colored::Colorize;

/// Print ranked suggestions with the remaining candidate count
pub fn print_suggestions(suggestions: &[ScoredGuess], candidates_remaining: usize) {
    println!(
        "\n{} {}",
        "Candidates remaining:".bright_cyan(),
        candidates_remaining.to_string().bright_yellow().bold()
    );
    println!("{}", "Suggested guesses:".bright_cyan().bold());
    print!("{}", format_suggestions(suggestions));
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {}",
            i + 1,
            colored_guess(&step.word, &step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Score:      {} ({})",
                step.score,
                if step.is_candidate { "candidate" } else { "probe" }
            );
        }
    }

    println!(
        "\n{}",
        share_grid(result.guesses.iter().map(|step| step.feedback.as_slice()))
    );

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.total_words > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guess_count, &count) in &result.distribution {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failed.is_empty() {
        println!(
            "\n{} {}",
            "Failed:".red().bold(),
            result.failed.join(", ").to_uppercase()
        );
    }
}
