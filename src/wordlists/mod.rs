//! Word banks
//!
//! Embedded per-language word lists plus the loader that turns them (or a
//! custom file) into an immutable `WordBank`.

mod embedded;
pub mod loader;

pub use loader::WordBank;
