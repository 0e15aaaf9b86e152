//! quiz CLI: run the Telegram or VK bot, or check the question bank. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use quiz_cli::{check, run_telegram, run_vk, Cli, Commands, QuizConfig};
use quiz_telegram::TelegramConfig;
use quiz_vk::VkConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = QuizConfig::load(cli.qa_dir)?;

    match cli.command {
        Commands::Telegram { token } => {
            let telegram = TelegramConfig::from_env(token)?;
            run_telegram(config, telegram).await
        }
        Commands::Vk { token } => {
            let vk = VkConfig::from_env(token)?;
            run_vk(config, vk).await
        }
        Commands::Check => {
            let count = check(&config)?;
            println!("{} question(s) in {}", count, config.qa_dir.display());
            Ok(())
        }
    }
}
