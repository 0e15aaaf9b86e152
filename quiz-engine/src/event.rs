//! Platform-agnostic conversation events.

use quiz_core::{Message, QuizTexts};
use std::fmt;

/// Text that starts a session. Adapters translate platform start signals (e.g. VK's start button) into it.
pub const START_COMMAND: &str = "/start";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Start,
    RequestNewQuestion,
    GiveUp,
    SubmitText(String),
    End,
}

impl Event {
    /// Classifies trimmed text: the start command, exact button labels, otherwise free text.
    pub fn from_text(text: &str, texts: &QuizTexts) -> Self {
        let text = text.trim();
        if is_start_command(text) {
            Event::Start
        } else if text == texts.new_question_button {
            Event::RequestNewQuestion
        } else if text == texts.give_up_button {
            Event::GiveUp
        } else if text == texts.end_button {
            Event::End
        } else {
            Event::SubmitText(text.to_string())
        }
    }

    pub fn from_message(message: &Message, texts: &QuizTexts) -> Self {
        Self::from_text(&message.content, texts)
    }

    /// Short name for logs; never includes the user's text.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Start => "start",
            Event::RequestNewQuestion => "request_new_question",
            Event::GiveUp => "give_up",
            Event::SubmitText(_) => "submit_text",
            Event::End => "end",
        }
    }
}

/// `/start`, also as `/start@bot_name` and with a deep-link argument (`/start ref`).
fn is_start_command(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .map(|command| command.split('@').next().unwrap_or(command))
        .is_some_and(|command| command == START_COMMAND)
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let texts = QuizTexts::default();
        assert_eq!(Event::from_text("/start", &texts), Event::Start);
        assert_eq!(
            Event::from_text("Новый вопрос", &texts),
            Event::RequestNewQuestion
        );
        assert_eq!(Event::from_text(" Сдаться ", &texts), Event::GiveUp);
        assert_eq!(Event::from_text("Завершить", &texts), Event::End);
        assert_eq!(
            Event::from_text("  Москва ", &texts),
            Event::SubmitText("Москва".to_string())
        );
        assert_eq!(Event::from_text("/start@quiz_bot", &texts), Event::Start);
        assert_eq!(Event::from_text("/start from_channel", &texts), Event::Start);
        assert_eq!(Event::from_text("/start@quiz_bot ref42", &texts), Event::Start);
        assert_eq!(
            Event::from_text("/started", &texts),
            Event::SubmitText("/started".to_string())
        );
        // Labels must match exactly, not as substrings.
        assert_eq!(
            Event::from_text("Новый вопрос пожалуйста", &texts),
            Event::SubmitText("Новый вопрос пожалуйста".to_string())
        );
    }
}
