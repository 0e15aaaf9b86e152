//! CLI parser.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quiz")]
#[command(about = "Quiz bot for Telegram and VK", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory with question files (overrides QA_DIR).
    #[arg(long, global = true)]
    pub qa_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override TG_BOT_TOKEN).
    Telegram {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Run the VK bot (config from env; token can override VK_TOKEN).
    Vk {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Load the question bank and print how many questions it holds.
    Check,
}
