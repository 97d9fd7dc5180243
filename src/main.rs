//! Wordle Buddy - CLI
//!
//! Suggests Wordle guesses from the feedback of earlier ones, in several
//! languages.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::sync::Arc;
use wordle_buddy::{
    commands::{random_target, run_benchmark, run_simple, solve_word, suggest},
    core::Language,
    output::{print_benchmark_result, print_solve_result, print_suggestions},
    solver::{DEFAULT_MAX_GUESSES, Guesser, GuesserConfig},
    wordlists::WordBank,
};

#[derive(Parser)]
#[command(
    name = "wordle_buddy",
    about = "Wordle helper that ranks guesses by letter frequency among the remaining words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word bank language
    #[arg(short, long, global = true, value_enum, default_value_t = Language::English)]
    language: Language,

    /// Load the word bank from a file instead (one word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Only suggest words that can still be the answer
    #[arg(long, global = true)]
    hardcore: bool,

    /// Number of guesses allowed per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Simple,

    /// Suggest next guesses from guesses already played
    Suggest {
        /// A guess already played (repeat for each guess, in order)
        #[arg(short, long = "guess")]
        guesses: Vec<String>,

        /// Feedback for the matching guess: 'gywww' or 'green,yellow,gray,gray,gray'
        #[arg(short, long = "feedback")]
        feedbacks: Vec<String>,

        /// Number of suggestions
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Pick a random target from the word bank
        #[arg(short, long, conflicts_with = "word")]
        random: bool,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the engine on the first words of the bank
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn load_bank(cli: &Cli) -> Result<WordBank> {
    let bank = match &cli.wordlist {
        Some(path) => WordBank::from_file(path)
            .with_context(|| format!("failed to load word list '{path}'"))?,
        None => WordBank::load(cli.language)?,
    };
    Ok(bank)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let bank = Arc::new(load_bank(&cli)?);
    info!("word bank ready: {} words of length {}", bank.len(), bank.word_length());

    let config = GuesserConfig::default()
        .hardcore(cli.hardcore)
        .max_guesses(cli.max_guesses);
    let mut guesser = Guesser::new(bank, config)?;

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => {
            let stdin = io::stdin();
            run_simple(&mut guesser, stdin.lock(), &mut io::stdout())
        }
        Commands::Suggest {
            guesses,
            feedbacks,
            count,
        } => {
            let suggestions = suggest(&mut guesser, &guesses, &feedbacks, count)?;
            print_suggestions(&suggestions, guesser.candidate_count());
            Ok(())
        }
        Commands::Solve {
            word,
            random,
            verbose,
        } => {
            let target = match (word, random) {
                (Some(word), _) => word,
                (None, true) => random_target(&guesser).context("word bank is empty")?,
                (None, false) => bail!("give a target word or --random"),
            };
            let result = solve_word(&mut guesser, &target)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} words...");
            let result = run_benchmark(&mut guesser, count, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
