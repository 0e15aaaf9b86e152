//! In-memory question bank keyed by question text.
//!
//! Built once at startup and shared read-only (`Arc<QuestionBank>`) by every session.

use quiz_core::{QuizError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::warn;

/// A question and its hand-written reference answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub reference_answer: String,
}

impl Question {
    pub fn new(text: impl Into<String>, reference_answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reference_answer: reference_answer.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
    index: HashMap<String, usize>,
}

impl QuestionBank {
    /// Builds a bank from questions in order. A repeated question text keeps its first
    /// position but takes the later answer; each overwrite is logged. Questions without text are dropped.
    pub fn from_questions(questions: impl IntoIterator<Item = Question>) -> Self {
        let mut bank = Self::default();
        for question in questions {
            if question.text.trim().is_empty() {
                warn!(answer = %question.reference_answer, "Dropping question without text");
                continue;
            }
            match bank.index.get(&question.text) {
                Some(&pos) => {
                    warn!(
                        question = %question.text,
                        previous_answer = %bank.questions[pos].reference_answer,
                        answer = %question.reference_answer,
                        "Duplicate question text, later answer wins"
                    );
                    bank.questions[pos] = question;
                }
                None => {
                    bank.index.insert(question.text.clone(), bank.questions.len());
                    bank.questions.push(question);
                }
            }
        }
        bank
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Picks a question uniformly at random. Fails with [`QuizError::EmptyBank`] on an empty bank.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Question> {
        self.questions.choose(rng).ok_or(QuizError::EmptyBank)
    }

    /// Reference answer for `question_text`; [`QuizError::StateDesync`] if the text is unknown.
    pub fn lookup(&self, question_text: &str) -> Result<&str> {
        self.index
            .get(question_text)
            .map(|&pos| self.questions[pos].reference_answer.as_str())
            .ok_or_else(|| QuizError::StateDesync(question_text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn sample_bank() -> QuestionBank {
        QuestionBank::from_questions(vec![
            Question::new("Столица Франции?", "Париж (столица Франции)."),
            Question::new("Самое глубокое озеро?", "Байкал"),
            Question::new("Кто победил Наполеона в 1812?", "Кутузов. Полководец"),
        ])
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let bank = sample_bank();
        assert_eq!(bank.lookup("Самое глубокое озеро?").unwrap(), "Байкал");
        assert_eq!(bank.lookup("Самое глубокое озеро?").unwrap(), "Байкал");
        assert!(matches!(
            bank.lookup("Нет такого"),
            Err(QuizError::StateDesync(q)) if q == "Нет такого"
        ));
    }

    #[test]
    fn test_duplicate_text_later_answer_wins() {
        let bank = QuestionBank::from_questions(vec![
            Question::new("Q", "first"),
            Question::new("Other", "x"),
            Question::new("Q", "second"),
        ]);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.lookup("Q").unwrap(), "second");
    }

    #[test]
    fn test_questions_without_text_are_dropped() {
        let bank = QuestionBank::from_questions(vec![
            Question::new("", "Да"),
            Question::new("   ", "Нет"),
            Question::new("Q", "answer"),
        ]);
        assert_eq!(bank.len(), 1);
        assert!(bank.lookup("").is_err());
        assert!(bank.iter().all(|q| !q.text.trim().is_empty()));
    }

    #[test]
    fn test_pick_random_empty_bank() {
        let bank = QuestionBank::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(bank.pick_random(&mut rng), Err(QuizError::EmptyBank)));
    }

    #[test]
    fn test_pick_random_covers_bank() {
        let bank = sample_bank();
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<String> = (0..200)
            .map(|_| bank.pick_random(&mut rng).unwrap().text.clone())
            .collect();
        assert_eq!(seen.len(), bank.len());
    }
}
