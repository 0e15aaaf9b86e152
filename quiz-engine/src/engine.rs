//! Conversation state machine.
//!
//! [`ConversationEngine::transition`] is pure apart from randomness: given the session state
//! read from the store and one event, it returns the replies to send, the store update to apply
//! and the resulting phase. It performs no I/O.
//!
//! | State | Event | Replies | Update | Phase |
//! |---|---|---|---|---|
//! | any | Start | greeting | clear | AwaitingNewQuestion |
//! | any | RequestNewQuestion | question | set | AwaitingAnswer |
//! | AwaitingNewQuestion | GiveUp / SubmitText | "press New Question" | keep | AwaitingNewQuestion |
//! | AwaitingAnswer | GiveUp | reveal + new question | set | AwaitingAnswer |
//! | AwaitingAnswer | SubmitText (correct) | congratulation | clear | AwaitingNewQuestion |
//! | AwaitingAnswer | SubmitText (wrong) | "try again" | keep | AwaitingAnswer |
//! | any | End | farewell | clear | Closed |

use question_bank::QuestionBank;
use quiz_core::{is_answer_correct, KeyboardDirective, QuizTexts, Reply};
use rand::Rng;
use std::sync::Arc;
use tracing::warn;

use crate::event::Event;
use crate::state::{Phase, SessionState, SessionUpdate};

/// Outcome of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub replies: Vec<Reply>,
    pub update: SessionUpdate,
    pub phase: Phase,
}

impl Transition {
    fn new(phase: Phase, update: SessionUpdate) -> Self {
        Self {
            replies: Vec::new(),
            update,
            phase,
        }
    }

    fn with_reply(mut self, reply: Reply) -> Self {
        self.replies.push(reply);
        self
    }
}

#[derive(Clone)]
pub struct ConversationEngine {
    bank: Arc<QuestionBank>,
    texts: QuizTexts,
}

impl ConversationEngine {
    pub fn new(bank: Arc<QuestionBank>, texts: QuizTexts) -> Self {
        Self { bank, texts }
    }

    pub fn texts(&self) -> &QuizTexts {
        &self.texts
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    fn main_keyboard(&self) -> KeyboardDirective {
        KeyboardDirective::Show(self.texts.main_keyboard())
    }

    fn answering_keyboard(&self) -> KeyboardDirective {
        KeyboardDirective::Show(self.texts.answering_keyboard())
    }

    /// Computes the next step for `event` in `state`.
    pub fn transition<R: Rng + ?Sized>(
        &self,
        state: &SessionState,
        event: Event,
        rng: &mut R,
    ) -> Transition {
        match (state, event) {
            (_, Event::Start) => {
                Transition::new(Phase::AwaitingNewQuestion, SessionUpdate::Clear)
                    .with_reply(Reply::new(&self.texts.greeting, self.main_keyboard()))
            }

            (_, Event::End) => Transition::new(Phase::Closed, SessionUpdate::Clear)
                .with_reply(Reply::new(&self.texts.farewell, KeyboardDirective::Hide)),

            (_, Event::RequestNewQuestion) => self.ask(Vec::new(), rng),

            (SessionState::AwaitingNewQuestion, Event::GiveUp | Event::SubmitText(_)) => {
                self.prompt_new_question(SessionUpdate::Keep)
            }

            (SessionState::AwaitingAnswer { question }, Event::GiveUp) => {
                match self.bank.lookup(question) {
                    Ok(answer) => self.ask(vec![Reply::plain(self.texts.reveal(answer))], rng),
                    Err(e) => self.recover_desync(e),
                }
            }

            (SessionState::AwaitingAnswer { question }, Event::SubmitText(text)) => {
                match self.bank.lookup(question) {
                    Ok(answer) if is_answer_correct(answer, &text) => {
                        Transition::new(Phase::AwaitingNewQuestion, SessionUpdate::Clear)
                            .with_reply(Reply::new(&self.texts.correct, self.main_keyboard()))
                    }
                    Ok(_) => Transition::new(Phase::AwaitingAnswer, SessionUpdate::Keep)
                        .with_reply(Reply::new(&self.texts.wrong, self.answering_keyboard())),
                    Err(e) => self.recover_desync(e),
                }
            }
        }
    }

    /// Picks a question after `preceding` replies. An empty bank falls back to the prompt.
    fn ask<R: Rng + ?Sized>(&self, preceding: Vec<Reply>, rng: &mut R) -> Transition {
        match self.bank.pick_random(rng) {
            Ok(question) => {
                let mut transition = Transition::new(
                    Phase::AwaitingAnswer,
                    SessionUpdate::Set(question.text.clone()),
                );
                transition.replies = preceding;
                transition.with_reply(Reply::new(&question.text, self.answering_keyboard()))
            }
            Err(e) => {
                warn!(error = %e, "Cannot pick a question");
                let mut transition = self.prompt_new_question(SessionUpdate::Clear);
                let mut replies = preceding;
                replies.append(&mut transition.replies);
                transition.replies = replies;
                transition
            }
        }
    }

    fn prompt_new_question(&self, update: SessionUpdate) -> Transition {
        Transition::new(Phase::AwaitingNewQuestion, update)
            .with_reply(Reply::new(&self.texts.press_new_question, self.main_keyboard()))
    }

    /// The stored question vanished from the bank: forget it and ask the user to start over.
    fn recover_desync(&self, error: quiz_core::QuizError) -> Transition {
        warn!(error = %error, "Session out of sync with question bank, clearing");
        self.prompt_new_question(SessionUpdate::Clear)
    }
}
