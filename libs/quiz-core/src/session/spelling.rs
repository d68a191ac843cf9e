//! Spelling session: place scrambled letters, judge once the board is full.

use super::{reward_correct, Collaborators, Feedback, SessionEvent};
use crate::error::Result;
use crate::evaluator::SpellingBoard;
use crate::random::RandomSource;
use crate::spelling::SpellingGenerator;
use crate::types::{FeedbackPhase, FeedbackPolicy, IncorrectReset, Locale, Signal, SpellingLevel};
use std::time::Duration;
use uuid::Uuid;

pub struct SpellingSession {
    generator: SpellingGenerator,
    rng: Box<dyn RandomSource + Send>,
    collaborators: Collaborators,
    policy: FeedbackPolicy,
    reset: IncorrectReset,
    level: SpellingLevel,
    board: SpellingBoard,
    feedback: Feedback,
}

impl SpellingSession {
    pub fn start(
        generator: SpellingGenerator,
        mut rng: Box<dyn RandomSource + Send>,
        collaborators: Collaborators,
        policy: FeedbackPolicy,
        reset: IncorrectReset,
    ) -> Result<Self> {
        let level = generator.generate(rng.as_mut())?;
        let board = SpellingBoard::new(&level);
        Ok(Self {
            generator,
            rng,
            collaborators,
            policy,
            reset,
            level,
            board,
            feedback: Feedback::default(),
        })
    }

    pub fn level(&self) -> &SpellingLevel {
        &self.level
    }

    pub fn board(&self) -> &SpellingBoard {
        &self.board
    }

    pub fn phase(&self) -> FeedbackPhase {
        self.feedback.phase()
    }

    pub fn feedback_seq(&self) -> u64 {
        self.feedback.seq()
    }

    pub fn dismiss_after(&self) -> Option<Duration> {
        self.policy.dismiss_after(self.feedback.phase())
    }

    /// Say the word, with nikud, in Hebrew.
    pub fn speak_word(&self) {
        self.collaborators
            .audio
            .speak(&self.level.target_word, Locale::Primary);
    }

    /// A letter dropped on a slot. Invalid drops are ignored.
    pub fn drop_letter(&mut self, unit_id: Uuid, slot: usize) -> Vec<SessionEvent> {
        if self.feedback.phase().is_active() {
            return Vec::new();
        }
        match self.board.place(unit_id, slot) {
            Ok(true) => {
                let mut events = vec![SessionEvent::LetterPlaced { slot }];
                self.judge(&mut events);
                events
            }
            Ok(false) => Vec::new(),
            Err(e) => {
                tracing::debug!(error = %e, "drop ignored");
                Vec::new()
            }
        }
    }

    /// A pool letter tapped: it goes to the first empty slot.
    pub fn tap_letter(&mut self, unit_id: Uuid) -> Vec<SessionEvent> {
        match self.board.first_empty_slot() {
            Some(slot) => self.drop_letter(unit_id, slot),
            None => Vec::new(),
        }
    }

    /// A filled slot tapped: its letter returns to the pool.
    pub fn remove_letter(&mut self, slot: usize) -> Vec<SessionEvent> {
        if self.feedback.phase().is_active() {
            return Vec::new();
        }
        match self.board.remove(slot) {
            Ok(Some(_)) => vec![SessionEvent::LetterRemoved { slot }],
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::debug!(error = %e, "removal ignored");
                Vec::new()
            }
        }
    }

    fn judge(&mut self, events: &mut Vec<SessionEvent>) {
        let Some(evaluation) = self.board.take_evaluation() else {
            return;
        };
        tracing::debug!(level = %self.level.id, correct = evaluation.is_correct, "board judged");

        if evaluation.is_correct {
            events.push(self.feedback.show(FeedbackPhase::Correct));
            reward_correct(&self.collaborators, events);
        } else {
            events.push(self.feedback.show(FeedbackPhase::Incorrect));
            self.collaborators.audio.play_signal(Signal::Failure);
            if self.reset == IncorrectReset::Immediately {
                self.board.reset();
                events.push(SessionEvent::BoardReset);
            }
        }
    }

    /// Dismiss feedback: a new level after a correct word, an emptied board
    /// (same pool order) after a wrong one.
    pub fn acknowledge(&mut self) -> Result<Vec<SessionEvent>> {
        match self.feedback.phase() {
            FeedbackPhase::None => Ok(Vec::new()),
            FeedbackPhase::Incorrect => {
                let mut events = vec![SessionEvent::FeedbackCleared];
                if self.reset == IncorrectReset::OnDismiss {
                    self.board.reset();
                    events.push(SessionEvent::BoardReset);
                }
                self.feedback.clear();
                Ok(events)
            }
            FeedbackPhase::Correct => {
                let level = self.generator.generate(self.rng.as_mut())?;
                self.board = SpellingBoard::new(&level);
                self.level = level;
                self.feedback.clear();
                Ok(vec![
                    SessionEvent::FeedbackCleared,
                    SessionEvent::QuestionChanged { id: self.level.id },
                ])
            }
        }
    }

    pub fn acknowledge_timeout(&mut self, seq: u64) -> Result<Vec<SessionEvent>> {
        if !self.feedback.is_current(seq) {
            return Ok(Vec::new());
        }
        self.acknowledge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SystemRandom;
    use crate::services::{MemoryRewardStore, SilentAudio};
    use crate::types::SpellingSettings;
    use crate::vocabulary::Vocabulary;
    use std::sync::Arc;

    fn session(reset: IncorrectReset) -> SpellingSession {
        let vocabulary = Vocabulary::load().unwrap();
        let generator =
            SpellingGenerator::new(&vocabulary.hebrew, &SpellingSettings::default()).unwrap();
        SpellingSession::start(
            generator,
            Box::new(SystemRandom::seeded(5)),
            Collaborators::new(Arc::new(SilentAudio), MemoryRewardStore::shared(0)),
            FeedbackPolicy::default(),
            reset,
        )
        .unwrap()
    }

    #[test]
    fn placements_are_ignored_during_feedback() {
        let mut session = session(IncorrectReset::OnDismiss);
        let units = session.level().letter_units.clone();
        for (slot, unit) in units.iter().enumerate() {
            session.drop_letter(unit.id, slot);
        }
        assert_eq!(session.phase(), FeedbackPhase::Correct);
        assert!(session.remove_letter(0).is_empty());
        assert!(session.board().is_complete());
    }

    #[test]
    fn tap_fills_first_empty_slot() {
        let mut session = session(IncorrectReset::OnDismiss);
        let units = session.level().scrambled.clone();
        let events = session.tap_letter(units[0].id);
        assert_eq!(events, vec![SessionEvent::LetterPlaced { slot: 0 }]);
        let events = session.tap_letter(units[1].id);
        assert_eq!(events, vec![SessionEvent::LetterPlaced { slot: 1 }]);
    }

    #[test]
    fn immediate_reset_clears_before_dismissal() {
        let mut session = session(IncorrectReset::Immediately);
        let mut units = session.level().letter_units.clone();
        units.reverse();
        // a reversed word could only match if it were a palindrome
        let palindrome = units
            .iter()
            .map(|u| u.char_with_marks.as_str())
            .collect::<String>()
            == session.level().target_word;
        if palindrome {
            return;
        }
        let mut events = Vec::new();
        for (slot, unit) in units.iter().enumerate() {
            events.extend(session.drop_letter(unit.id, slot));
        }
        assert!(events.contains(&SessionEvent::BoardReset));
        assert_eq!(session.phase(), FeedbackPhase::Incorrect);
        assert!(session.board().slots().iter().all(Option::is_none));

        let events = session.acknowledge().unwrap();
        assert_eq!(events, vec![SessionEvent::FeedbackCleared]);
    }

    #[test]
    fn invalid_drop_changes_nothing() {
        let mut session = session(IncorrectReset::OnDismiss);
        assert!(session.drop_letter(Uuid::new_v4(), 0).is_empty());
        let unit = session.level().letter_units[0].id;
        assert!(session.drop_letter(unit, 99).is_empty());
        assert!(session.board().slots().iter().all(Option::is_none));
    }
}
