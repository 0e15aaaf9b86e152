//! User-visible strings: button labels and bot phrases. Defaults are in Russian.

use crate::types::{Button, ButtonKind, Keyboard};

/// Button labels and bot phrases. Labels double as the exact text matched on input.
#[derive(Debug, Clone)]
pub struct QuizTexts {
    pub new_question_button: String,
    pub give_up_button: String,
    pub end_button: String,
    pub greeting: String,
    pub press_new_question: String,
    pub correct: String,
    pub wrong: String,
    /// Prefix of the answer reveal; the reference answer follows it.
    pub reveal_prefix: String,
    pub farewell: String,
    /// Sent when the event could not be processed (e.g. store unavailable).
    pub try_again: String,
}

impl Default for QuizTexts {
    fn default() -> Self {
        Self {
            new_question_button: "Новый вопрос".to_string(),
            give_up_button: "Сдаться".to_string(),
            end_button: "Завершить".to_string(),
            greeting: "Привет! Начинаем викторину! Нажми «Новый вопрос»".to_string(),
            press_new_question: "Нажми «Новый вопрос»".to_string(),
            correct: "Правильно! Поздравляю! Для следующего вопроса нажми «Новый вопрос»"
                .to_string(),
            wrong: "Неправильно… Попробуешь ещё раз?".to_string(),
            reveal_prefix: "Правильный ответ: ".to_string(),
            farewell: "Приходите еще!".to_string(),
            try_again: "Что-то пошло не так, попробуйте ещё раз".to_string(),
        }
    }
}

impl QuizTexts {
    fn button(&self, kind: ButtonKind) -> Button {
        let label = match kind {
            ButtonKind::NewQuestion => &self.new_question_button,
            ButtonKind::End => &self.end_button,
            ButtonKind::GiveUp => &self.give_up_button,
        };
        Button {
            label: label.clone(),
            kind,
        }
    }

    /// Keyboard shown while no question is pending: `[New Question]`, `[End]`.
    pub fn main_keyboard(&self) -> Keyboard {
        Keyboard {
            rows: vec![
                vec![self.button(ButtonKind::NewQuestion)],
                vec![self.button(ButtonKind::End)],
            ],
        }
    }

    /// Keyboard shown while a question is pending: `[New Question]`, `[End, Give Up]`.
    pub fn answering_keyboard(&self) -> Keyboard {
        Keyboard {
            rows: vec![
                vec![self.button(ButtonKind::NewQuestion)],
                vec![self.button(ButtonKind::End), self.button(ButtonKind::GiveUp)],
            ],
        }
    }

    pub fn reveal(&self, reference_answer: &str) -> String {
        format!("{}{}", self.reveal_prefix, reference_answer)
    }
}
