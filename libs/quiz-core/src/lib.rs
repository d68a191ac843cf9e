//! Core quiz engine shared by the front ends.
//!
//! Provides:
//! - Vocabulary tables (Hebrew letters, English words, colours)
//! - Multiple-choice question generators with distractor sampling
//! - Spelling puzzles built from nikud-aware letter units
//! - Session state machines with feedback phases and star rewards
//! - Collaborator traits for audio output and reward persistence

pub mod error;
pub mod evaluator;
pub mod generator;
pub mod random;
pub mod services;
pub mod session;
pub mod spelling;
pub mod types;
pub mod vocabulary;

pub use error::{QuizError, Result, StoreError};
pub use evaluator::{evaluate_option, Evaluation, PoolUnit, SpellingBoard};
pub use generator::{
    get_generator, ArithmeticQuestions, LetterMatch, QuestionGenerator, WordMatch,
};
pub use random::{RandomSource, SystemRandom};
pub use services::{
    award_star, AudioService, MemoryRewardStore, RewardStore, SharedRewards, SilentAudio,
};
pub use session::{Collaborators, GameSession, QuizSession, SessionEvent, SpellingSession};
pub use spelling::SpellingGenerator;
pub use types::{
    AnswerValue, ArithmeticLevel, ArithmeticVisual, FeedbackPhase, FeedbackPolicy, GameKind,
    GameSettings, IncorrectReset, LetterUnit, Locale, OptionKind, Operator, PromptKind, Question,
    Signal, SpellingLevel, SpellingSettings, VisualPrompt,
};
pub use vocabulary::{Vocabulary, VocabularyEntry, VocabularyTable};
