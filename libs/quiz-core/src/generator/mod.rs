//! Question generators.
//!
//! Each quiz mode implements [`QuestionGenerator`]; the distractor sampling
//! shared by all of them lives here.

pub mod arithmetic;
pub mod letters;
pub mod words;

use crate::error::{QuizError, Result};
use crate::random::RandomSource;
use crate::types::{AnswerValue, GameKind, GameSettings, Question};
use crate::vocabulary::Vocabulary;
use rand::seq::SliceRandom;

pub use arithmetic::ArithmeticQuestions;
pub use letters::LetterMatch;
pub use words::WordMatch;

/// Wrong options shown next to the correct one.
pub const DISTRACTOR_COUNT: usize = 2;

/// Trait for multiple-choice question generators.
pub trait QuestionGenerator: Send + Sync {
    /// Game this generator feeds.
    fn kind(&self) -> GameKind;

    /// Build a fresh question.
    fn generate(&self, rng: &mut dyn RandomSource) -> Result<Question>;
}

/// Get the generator for a plain quiz. Spelling has its own generator and
/// is a configuration error here.
pub fn get_generator(
    kind: GameKind,
    vocabulary: &Vocabulary,
    settings: &GameSettings,
) -> Result<Box<dyn QuestionGenerator>> {
    let attempts = settings.max_generation_attempts;
    match kind {
        GameKind::Letters => Ok(Box::new(LetterMatch::new(
            vocabulary.hebrew.clone(),
            attempts,
        )?)),
        GameKind::English => Ok(Box::new(WordMatch::english(
            vocabulary.english.clone(),
            attempts,
        ))),
        GameKind::Colors => Ok(Box::new(WordMatch::colors(
            vocabulary.colors.clone(),
            attempts,
        ))),
        GameKind::Math => Ok(Box::new(ArithmeticQuestions::new(
            settings.arithmetic_level,
            vocabulary.counting_glyphs.clone(),
            attempts,
        ))),
        GameKind::Spelling => Err(QuizError::Configuration(
            "spelling is not a multiple-choice game".to_string(),
        )),
    }
}

/// Sample-and-reject until [`DISTRACTOR_COUNT`] distinct values differing from
/// `correct` are collected. `sample` may return `None` to reject a draw
/// outright; every call counts against `attempts`.
pub(crate) fn collect_distractors<T, F>(
    correct: &T,
    attempts: usize,
    mut sample: F,
) -> Result<Vec<T>>
where
    T: PartialEq,
    F: FnMut() -> Option<T>,
{
    let mut picked: Vec<T> = Vec::with_capacity(DISTRACTOR_COUNT);
    for _ in 0..attempts {
        if let Some(candidate) = sample() {
            if candidate != *correct && !picked.contains(&candidate) {
                picked.push(candidate);
                if picked.len() == DISTRACTOR_COUNT {
                    return Ok(picked);
                }
            }
        }
    }

    tracing::error!(attempts, found = picked.len(), "distractor sampling exhausted");
    Err(QuizError::GenerationExhausted {
        needed: DISTRACTOR_COUNT,
        attempts,
    })
}

/// Correct answer and distractors in random order.
pub(crate) fn shuffled_options(
    correct: AnswerValue,
    distractors: Vec<AnswerValue>,
    rng: &mut dyn RandomSource,
) -> Vec<AnswerValue> {
    let mut options = Vec::with_capacity(distractors.len() + 1);
    options.push(correct);
    options.extend(distractors);
    options.shuffle(rng);
    options
}
