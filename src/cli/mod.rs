//! Command Line Interface for Lexistat.

pub mod args;
pub mod commands;
pub mod data;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
