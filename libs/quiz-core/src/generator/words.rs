//! Word-match questions over a flat word list: English vocabulary (pick the
//! picture) and colours (pick the swatch).

use super::{collect_distractors, shuffled_options, QuestionGenerator};
use crate::error::{QuizError, Result};
use crate::random::RandomSource;
use crate::types::{AnswerValue, GameKind, Locale, OptionKind, PromptKind, Question, VisualPrompt};
use crate::vocabulary::{VocabularyEntry, VocabularyTable};
use rand::seq::SliceRandom;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct WordMatch {
    kind: GameKind,
    option_kind: OptionKind,
    words: Vec<VocabularyEntry>,
    max_attempts: usize,
}

impl WordMatch {
    /// English word → picture.
    pub fn english(table: Arc<VocabularyTable>, max_attempts: usize) -> Self {
        Self {
            kind: GameKind::English,
            option_kind: OptionKind::Image,
            words: table.flatten(),
            max_attempts,
        }
    }

    /// English colour name → swatch.
    pub fn colors(table: Arc<VocabularyTable>, max_attempts: usize) -> Self {
        Self {
            kind: GameKind::Colors,
            option_kind: OptionKind::Color,
            words: table.flatten(),
            max_attempts,
        }
    }

    /// Question for a specific entry of the list.
    pub fn question_for(
        &self,
        selected: &VocabularyEntry,
        rng: &mut dyn RandomSource,
    ) -> Result<Question> {
        let words = &self.words;
        let distractors = collect_distractors(&selected.glyph, self.max_attempts, || {
            let candidate = words.choose(rng)?;
            if candidate.display_text == selected.display_text {
                return None;
            }
            Some(candidate.glyph.clone())
        })?;

        let options = shuffled_options(
            AnswerValue::from(selected.glyph.as_str()),
            distractors.into_iter().map(AnswerValue::from).collect(),
            rng,
        );

        Ok(Question {
            id: Uuid::new_v4(),
            kind: self.kind,
            prompt: selected.display_text.clone(),
            speech_text: selected.audio_text.clone(),
            speech_locale: Locale::Secondary,
            visual: VisualPrompt::NoVisual,
            correct_answer: AnswerValue::from(selected.glyph.as_str()),
            options,
            prompt_kind: PromptKind::Text,
            option_kind: self.option_kind,
        })
    }
}

impl QuestionGenerator for WordMatch {
    fn kind(&self) -> GameKind {
        self.kind
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Result<Question> {
        let selected = self
            .words
            .choose(rng)
            .ok_or_else(|| QuizError::Configuration("word list is empty".to_string()))?
            .clone();
        self.question_for(&selected, rng)
    }
}
