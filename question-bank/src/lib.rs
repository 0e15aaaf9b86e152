//! # question-bank
//!
//! [`QuestionBank`] maps question text to its reference answer; [`load_questions`] builds it from
//! a directory of KOI8-R question files. The bank is immutable after loading.

mod bank;
mod loader;

pub use bank::{Question, QuestionBank};
pub use loader::{
    decode_koi8r, load_questions, parse_questions, BankError, ANSWER_MARKER, QUESTION_MARKER,
};
