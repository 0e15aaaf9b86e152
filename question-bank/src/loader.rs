//! Loads question files from a directory.
//!
//! Files are KOI8-R text made of blank-line separated blocks. A block starting with
//! [`QUESTION_MARKER`] opens a question (its remaining lines are the text); the next block
//! starting with [`ANSWER_MARKER`] supplies the answer. Other blocks (authors, sources, comments)
//! are skipped.

use crate::bank::{Question, QuestionBank};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const QUESTION_MARKER: &str = "Вопрос";
pub const ANSWER_MARKER: &str = "Ответ";

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Question directory not found: {0}")]
    DirNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<BankError> for quiz_core::QuizError {
    fn from(e: BankError) -> Self {
        match e {
            BankError::DirNotFound(path) => quiz_core::QuizError::Config(format!(
                "Question directory not found: {}",
                path.display()
            )),
            BankError::Io { source, .. } => quiz_core::QuizError::Io(source),
        }
    }
}

/// Decodes a single-byte KOI8-R file body.
pub fn decode_koi8r(bytes: &[u8]) -> String {
    let (text, _) = encoding_rs::KOI8_R.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Drops the marker line and joins the rest.
fn block_body(block: &str) -> String {
    block
        .lines()
        .skip(1)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> BankError {
    let path = path.to_path_buf();
    move |source| BankError::Io { path, source }
}

/// Parses one decoded file into questions, in file order.
pub fn parse_questions(text: &str) -> Vec<Question> {
    let text = text.replace("\r\n", "\n");
    let mut questions = Vec::new();
    let mut pending: Option<String> = None;

    for block in text.split("\n\n") {
        let block = block.trim_start();
        if block.starts_with(QUESTION_MARKER) {
            let body = block_body(block);
            if body.trim().is_empty() {
                warn!(block = %block.trim_end(), "Skipping question block without text");
                pending = None;
            } else {
                pending = Some(body);
            }
        } else if block.starts_with(ANSWER_MARKER) {
            if let Some(question) = pending.take() {
                questions.push(Question::new(question, block_body(block)));
            }
        }
    }

    questions
}

/// Loads every regular file in `dir` (name order, so a later file wins on duplicate text).
pub fn load_questions(dir: impl AsRef<Path>) -> Result<QuestionBank, BankError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(BankError::DirNotFound(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let path = entry.map_err(io_error(dir))?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut questions = Vec::new();
    for path in &paths {
        let bytes = fs::read(path).map_err(io_error(path))?;
        let parsed = parse_questions(&decode_koi8r(&bytes));
        debug!(file = %path.display(), questions = parsed.len(), "Parsed question file");
        questions.extend(parsed);
    }

    let bank = QuestionBank::from_questions(questions);
    info!(
        dir = %dir.display(),
        files = paths.len(),
        questions = bank.len(),
        "Question bank loaded"
    );
    Ok(bank)
}
