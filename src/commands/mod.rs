//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod suggest;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveResult, random_target, solve_word};
pub use suggest::{parse_feedback_arg, suggest};
