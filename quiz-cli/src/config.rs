//! Shared bot config: question directory, session database, log file. Loaded from env.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// QA_DIR
    pub qa_dir: PathBuf,
    /// SESSION_DATABASE_URL or DATABASE_URL
    pub session_database_url: String,
    /// LOG_FILE
    pub log_file: String,
}

impl QuizConfig {
    /// Loads from environment variables. `qa_dir` overrides QA_DIR if provided.
    pub fn load(qa_dir: Option<PathBuf>) -> Result<Self> {
        let qa_dir = qa_dir
            .or_else(|| env::var("QA_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("QA"));
        let session_database_url = env::var("SESSION_DATABASE_URL")
            .or_else(|_| env::var("DATABASE_URL"))
            .unwrap_or_else(|_| "./data/sessions.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/quiz-bot.log".to_string());

        Ok(Self {
            qa_dir,
            session_database_url,
            log_file,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.qa_dir.as_os_str().is_empty() {
            anyhow::bail!("QA_DIR is empty");
        }
        if self.session_database_url.trim().is_empty() {
            anyhow::bail!("SESSION_DATABASE_URL is empty");
        }
        if self.log_file.trim().is_empty() {
            anyhow::bail!("LOG_FILE is empty");
        }
        Ok(())
    }
}
