//! Session state machines.
//!
//! A session owns the active question or spelling level and its feedback
//! phase. Every transition is a reaction to one external event and returns
//! the [`SessionEvent`]s it produced for the presentation layer.

pub mod quiz;
pub mod spelling;

use crate::error::Result;
use crate::generator::get_generator;
use crate::random::RandomSource;
use crate::services::{award_star, AudioService, SharedRewards};
use crate::spelling::SpellingGenerator;
use crate::types::{FeedbackPhase, GameKind, GameSettings, Signal};
use crate::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub use quiz::QuizSession;
pub use spelling::SpellingSession;

/// Something the presentation layer should react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A feedback phase started; `seq` identifies it for timers.
    FeedbackShown { phase: FeedbackPhase, seq: u64 },
    /// Feedback was acknowledged and play resumed.
    FeedbackCleared,
    RewardEarned { total: u64 },
    CelebrationRequested,
    QuestionChanged { id: Uuid },
    LetterPlaced { slot: usize },
    LetterRemoved { slot: usize },
    BoardReset,
}

/// Capabilities injected into every session.
#[derive(Clone)]
pub struct Collaborators {
    pub audio: Arc<dyn AudioService>,
    pub rewards: SharedRewards,
}

impl Collaborators {
    pub fn new(audio: Arc<dyn AudioService>, rewards: SharedRewards) -> Self {
        Self { audio, rewards }
    }
}

/// Feedback phase plus a counter distinguishing successive phases.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Feedback {
    phase: FeedbackPhase,
    seq: u64,
}

impl Feedback {
    pub(crate) fn phase(&self) -> FeedbackPhase {
        self.phase
    }

    pub(crate) fn seq(&self) -> u64 {
        self.seq
    }

    pub(crate) fn show(&mut self, phase: FeedbackPhase) -> SessionEvent {
        self.seq += 1;
        self.phase = phase;
        SessionEvent::FeedbackShown {
            phase,
            seq: self.seq,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.phase = FeedbackPhase::None;
    }

    /// Whether a timer armed for `seq` may still dismiss.
    pub(crate) fn is_current(&self, seq: u64) -> bool {
        self.phase.is_active() && self.seq == seq
    }
}

/// Side effects of a correct answer: success tone, one star, one celebration.
pub(crate) fn reward_correct(collaborators: &Collaborators, events: &mut Vec<SessionEvent>) {
    collaborators.audio.play_signal(Signal::Success);
    match award_star(&collaborators.rewards) {
        Ok(total) => {
            tracing::info!(total, "star earned");
            events.push(SessionEvent::RewardEarned { total });
        }
        Err(e) => tracing::warn!(error = %e, "failed to persist star"),
    }
    events.push(SessionEvent::CelebrationRequested);
}

/// A running game of either shape.
pub enum GameSession {
    Quiz(QuizSession),
    Spelling(SpellingSession),
}

impl GameSession {
    /// Navigation entry hook: build the game and its first question or level.
    pub fn enter(
        kind: GameKind,
        vocabulary: &Vocabulary,
        settings: &GameSettings,
        collaborators: Collaborators,
        rng: Box<dyn RandomSource + Send>,
    ) -> Result<Self> {
        tracing::debug!(game = kind.as_str(), "entering game");
        match kind {
            GameKind::Spelling => {
                let generator = SpellingGenerator::new(&vocabulary.hebrew, &settings.spelling)?;
                Ok(Self::Spelling(SpellingSession::start(
                    generator,
                    rng,
                    collaborators,
                    settings.feedback.clone(),
                    settings.spelling.incorrect_reset,
                )?))
            }
            other => {
                let generator = get_generator(other, vocabulary, settings)?;
                Ok(Self::Quiz(QuizSession::start(
                    generator,
                    rng,
                    collaborators,
                    settings.feedback.clone(),
                )?))
            }
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Self::Quiz(s) => s.kind(),
            Self::Spelling(_) => GameKind::Spelling,
        }
    }

    pub fn phase(&self) -> FeedbackPhase {
        match self {
            Self::Quiz(s) => s.phase(),
            Self::Spelling(s) => s.phase(),
        }
    }

    pub fn feedback_seq(&self) -> u64 {
        match self {
            Self::Quiz(s) => s.feedback_seq(),
            Self::Spelling(s) => s.feedback_seq(),
        }
    }

    pub fn dismiss_after(&self) -> Option<Duration> {
        match self {
            Self::Quiz(s) => s.dismiss_after(),
            Self::Spelling(s) => s.dismiss_after(),
        }
    }

    /// Narrate the current prompt.
    pub fn speak(&self) {
        match self {
            Self::Quiz(s) => s.speak_prompt(),
            Self::Spelling(s) => s.speak_word(),
        }
    }

    pub fn acknowledge(&mut self) -> Result<Vec<SessionEvent>> {
        match self {
            Self::Quiz(s) => s.acknowledge(),
            Self::Spelling(s) => s.acknowledge(),
        }
    }

    pub fn acknowledge_timeout(&mut self, seq: u64) -> Result<Vec<SessionEvent>> {
        match self {
            Self::Quiz(s) => s.acknowledge_timeout(seq),
            Self::Spelling(s) => s.acknowledge_timeout(seq),
        }
    }
}
