//! # quiz-cli
//!
//! Argument parsing, shared config and the startup sequence for the `quiz` binary.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::QuizConfig;
pub use runner::{build_handler, check, load_bank, run_telegram, run_vk};
