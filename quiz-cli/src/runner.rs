//! Startup sequence shared by both transports: validate config, init tracing, load the bank,
//! open the session store, build the handler, then run the transport loop.

use anyhow::{Context, Result};
use question_bank::{load_questions, QuestionBank};
use quiz_core::{init_tracing, Bot, QuizError, QuizTexts};
use quiz_engine::{ConversationEngine, QuizHandler};
use quiz_telegram::{run_repl, TelegramBotAdapter, TelegramConfig};
use quiz_vk::{run_longpoll, LongPoll, VkApiClient, VkBotAdapter, VkConfig};
use session_store::SqliteSessionStore;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::config::QuizConfig;

/// Loads the bank; an empty bank is an error.
pub fn load_bank(config: &QuizConfig) -> Result<Arc<QuestionBank>> {
    let bank = load_questions(&config.qa_dir)
        .with_context(|| format!("Load questions from {}", config.qa_dir.display()))?;
    if bank.is_empty() {
        return Err(QuizError::EmptyBank).with_context(|| {
            format!("No questions found in {}", config.qa_dir.display())
        });
    }
    Ok(Arc::new(bank))
}

/// Builds the handler on top of the durable session store.
pub async fn build_handler(
    config: &QuizConfig,
    bank: Arc<QuestionBank>,
    bot: Arc<dyn Bot>,
) -> Result<QuizHandler> {
    let store = SqliteSessionStore::new(&config.session_database_url)
        .await
        .with_context(|| format!("Open session store {}", config.session_database_url))?;
    info!(database_url = %config.session_database_url, "Session store opened");
    Ok(QuizHandler::new(
        ConversationEngine::new(bank, QuizTexts::default()),
        Arc::new(store),
        bot,
    ))
}

#[instrument(skip(config, telegram))]
pub async fn run_telegram(config: QuizConfig, telegram: TelegramConfig) -> Result<()> {
    config.validate()?;
    telegram.validate()?;
    init_tracing(&config.log_file)?;

    info!(qa_dir = %config.qa_dir.display(), "Starting Telegram quiz bot");
    let bank = load_bank(&config)?;
    let bot = telegram.build_bot()?;
    let handler = build_handler(
        &config,
        bank,
        Arc::new(TelegramBotAdapter::new(bot.clone())),
    )
    .await?;

    run_repl(bot, handler).await
}

#[instrument(skip(config, vk))]
pub async fn run_vk(config: QuizConfig, vk: VkConfig) -> Result<()> {
    config.validate()?;
    vk.validate()?;
    init_tracing(&config.log_file)?;

    info!(qa_dir = %config.qa_dir.display(), group_id = vk.group_id, "Starting VK quiz bot");
    let bank = load_bank(&config)?;
    let api = VkApiClient::new(&vk).context("Build VK API client")?;
    let handler = build_handler(&config, bank, Arc::new(VkBotAdapter::new(api.clone()))).await?;

    run_longpoll(
        LongPoll::new(api, vk.group_id, vk.long_poll_wait_secs),
        handler,
    )
    .await
}

/// Loads the bank and returns its size. Fails when the directory is missing or holds no questions.
pub fn check(config: &QuizConfig) -> Result<usize> {
    config.validate()?;
    Ok(load_bank(config)?.len())
}
