//! Letter-match questions: show a Hebrew letter, pick the picture whose word
//! starts with it.

use super::{collect_distractors, shuffled_options, QuestionGenerator, DISTRACTOR_COUNT};
use crate::error::{QuizError, Result};
use crate::random::RandomSource;
use crate::types::{AnswerValue, GameKind, Locale, OptionKind, PromptKind, Question, VisualPrompt};
use crate::vocabulary::VocabularyTable;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct LetterMatch {
    table: Arc<VocabularyTable>,
    max_attempts: usize,
}

impl LetterMatch {
    /// Fails when some letter could not be offered two wrong pictures.
    pub fn new(table: Arc<VocabularyTable>, max_attempts: usize) -> Result<Self> {
        table.ensure_foreign_glyphs(DISTRACTOR_COUNT)?;
        Ok(Self {
            table,
            max_attempts,
        })
    }

    /// Question for a specific letter.
    pub fn question_for(&self, letter: &str, rng: &mut dyn RandomSource) -> Result<Question> {
        let entries = self.table.lookup(letter).ok_or_else(|| {
            QuizError::Configuration(format!("letter '{}' is not in the table", letter))
        })?;
        let correct = entries.choose(rng).ok_or_else(|| {
            QuizError::Configuration(format!("letter '{}' has no words", letter))
        })?;

        // a picture of any word for this letter would also be right
        let own: HashSet<&str> = entries.iter().map(|e| e.glyph.as_str()).collect();
        let categories = self.table.all_categories();
        let table = &self.table;
        let distractors = collect_distractors(&correct.glyph, self.max_attempts, || {
            let other = *categories.choose(rng)?;
            if other == letter {
                return None;
            }
            let entry = table.lookup(other)?.choose(rng)?;
            if own.contains(entry.glyph.as_str()) {
                return None;
            }
            Some(entry.glyph.clone())
        })?;

        let options = shuffled_options(
            AnswerValue::from(correct.glyph.as_str()),
            distractors.into_iter().map(AnswerValue::from).collect(),
            rng,
        );

        Ok(Question {
            id: Uuid::new_v4(),
            kind: GameKind::Letters,
            prompt: letter.to_string(),
            speech_text: format!("הָאוֹת {}", letter),
            speech_locale: Locale::Primary,
            visual: VisualPrompt::NoVisual,
            correct_answer: AnswerValue::from(correct.glyph.as_str()),
            options,
            prompt_kind: PromptKind::Text,
            option_kind: OptionKind::Image,
        })
    }
}

impl QuestionGenerator for LetterMatch {
    fn kind(&self) -> GameKind {
        GameKind::Letters
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Result<Question> {
        let categories = self.table.all_categories();
        let letter = categories
            .choose(rng)
            .copied()
            .ok_or_else(|| QuizError::Configuration("letter table is empty".to_string()))?;
        self.question_for(letter, rng)
    }
}
