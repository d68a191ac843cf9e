//! Multiple-choice session: question → feedback → next question.

use super::{reward_correct, Collaborators, Feedback, SessionEvent};
use crate::error::Result;
use crate::evaluator::evaluate_option;
use crate::generator::QuestionGenerator;
use crate::random::RandomSource;
use crate::types::{AnswerValue, FeedbackPhase, FeedbackPolicy, GameKind, Question, Signal};
use std::time::Duration;

pub struct QuizSession {
    generator: Box<dyn QuestionGenerator>,
    rng: Box<dyn RandomSource + Send>,
    collaborators: Collaborators,
    policy: FeedbackPolicy,
    question: Question,
    feedback: Feedback,
}

impl QuizSession {
    /// Generate the first question and wait for an answer.
    pub fn start(
        generator: Box<dyn QuestionGenerator>,
        mut rng: Box<dyn RandomSource + Send>,
        collaborators: Collaborators,
        policy: FeedbackPolicy,
    ) -> Result<Self> {
        let question = generator.generate(rng.as_mut())?;
        Ok(Self {
            generator,
            rng,
            collaborators,
            policy,
            question,
            feedback: Feedback::default(),
        })
    }

    pub fn kind(&self) -> GameKind {
        self.generator.kind()
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn phase(&self) -> FeedbackPhase {
        self.feedback.phase()
    }

    pub fn feedback_seq(&self) -> u64 {
        self.feedback.seq()
    }

    /// Auto-dismiss delay for the phase on screen, if any.
    pub fn dismiss_after(&self) -> Option<Duration> {
        self.policy.dismiss_after(self.feedback.phase())
    }

    pub fn speak_prompt(&self) {
        self.collaborators
            .audio
            .speak(&self.question.speech_text, self.question.speech_locale);
    }

    /// Answer with an option value. Ignored while feedback is showing.
    pub fn submit(&mut self, answer: &AnswerValue) -> Vec<SessionEvent> {
        if self.feedback.phase().is_active() {
            tracing::debug!("answer ignored during feedback");
            return Vec::new();
        }

        let mut events = Vec::new();
        if evaluate_option(&self.question, answer).is_correct {
            events.push(self.feedback.show(FeedbackPhase::Correct));
            reward_correct(&self.collaborators, &mut events);
        } else {
            events.push(self.feedback.show(FeedbackPhase::Incorrect));
            self.collaborators.audio.play_signal(Signal::Failure);
        }
        tracing::debug!(
            question = %self.question.id,
            phase = ?self.feedback.phase(),
            "answer judged"
        );
        events
    }

    /// Answer by option position. Out-of-range positions are ignored.
    pub fn submit_index(&mut self, index: usize) -> Vec<SessionEvent> {
        match self.question.options.get(index).cloned() {
            Some(answer) => self.submit(&answer),
            None => Vec::new(),
        }
    }

    /// Dismiss feedback. After a correct answer a new question is generated;
    /// if that fails the phase stays so the dismissal can be retried.
    pub fn acknowledge(&mut self) -> Result<Vec<SessionEvent>> {
        match self.feedback.phase() {
            FeedbackPhase::None => Ok(Vec::new()),
            FeedbackPhase::Incorrect => {
                self.feedback.clear();
                Ok(vec![SessionEvent::FeedbackCleared])
            }
            FeedbackPhase::Correct => {
                let next = self.generator.generate(self.rng.as_mut())?;
                self.question = next;
                self.feedback.clear();
                Ok(vec![
                    SessionEvent::FeedbackCleared,
                    SessionEvent::QuestionChanged {
                        id: self.question.id,
                    },
                ])
            }
        }
    }

    /// Timer-driven dismissal; a stale `seq` is a no-op.
    pub fn acknowledge_timeout(&mut self, seq: u64) -> Result<Vec<SessionEvent>> {
        if !self.feedback.is_current(seq) {
            return Ok(Vec::new());
        }
        self.acknowledge()
    }
}
