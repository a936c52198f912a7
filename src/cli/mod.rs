// CLI module
// Public interface for command handlers and prompting

pub mod commands;
mod prompt;

pub use prompt::{choose_kiss, show_kisses};
