//! Spelling puzzles.
//!
//! A word is split into letter units, one base character followed by any
//! combining marks (nikud), and the units are scrambled into a pool.

use crate::error::{QuizError, Result};
use crate::random::RandomSource;
use crate::types::{LetterUnit, SpellingLevel, SpellingSettings};
use crate::vocabulary::{VocabularyEntry, VocabularyTable};
use rand::seq::SliceRandom;
use unicode_normalization::char::is_combining_mark;
use uuid::Uuid;

/// Remove every combining mark.
pub fn strip_marks(word: &str) -> String {
    word.chars().filter(|c| !is_combining_mark(*c)).collect()
}

/// Number of letters once marks are removed.
pub fn letter_count(word: &str) -> usize {
    word.chars().filter(|c| !is_combining_mark(*c)).count()
}

/// Split a word into letter units in word order.
pub fn decompose(word: &str) -> Vec<LetterUnit> {
    let mut units: Vec<LetterUnit> = Vec::new();
    for c in word.chars() {
        match units.last_mut() {
            Some(unit) if is_combining_mark(c) => unit.char_with_marks.push(c),
            _ => units.push(LetterUnit {
                id: Uuid::new_v4(),
                base_char: c.to_string(),
                char_with_marks: c.to_string(),
            }),
        }
    }
    units
}

/// Picks words that fit the board and builds levels from them.
#[derive(Debug, Clone)]
pub struct SpellingGenerator {
    suitable: Vec<VocabularyEntry>,
}

impl SpellingGenerator {
    /// Precompute the words whose letter count fits `settings`. Phrases are
    /// skipped since spaces cannot be placed.
    pub fn new(table: &VocabularyTable, settings: &SpellingSettings) -> Result<Self> {
        let suitable: Vec<VocabularyEntry> = table
            .entries()
            .filter(|e| !e.display_text.chars().any(char::is_whitespace))
            .filter(|e| {
                let n = letter_count(&e.display_text);
                n >= settings.min_letters && n <= settings.max_letters
            })
            .cloned()
            .collect();

        if suitable.is_empty() {
            return Err(QuizError::Configuration(format!(
                "table '{}' has no words with {}..={} letters",
                table.name(),
                settings.min_letters,
                settings.max_letters
            )));
        }
        tracing::debug!(words = suitable.len(), "spelling word list ready");
        Ok(Self { suitable })
    }

    pub fn suitable_words(&self) -> &[VocabularyEntry] {
        &self.suitable
    }

    pub fn generate(&self, rng: &mut dyn RandomSource) -> Result<SpellingLevel> {
        let entry = self
            .suitable
            .choose(rng)
            .ok_or_else(|| QuizError::Configuration("no spelling words".to_string()))?;
        Ok(Self::level_for(entry, rng))
    }

    /// Build a level for one entry.
    pub fn level_for(entry: &VocabularyEntry, rng: &mut dyn RandomSource) -> SpellingLevel {
        let letter_units = decompose(&entry.display_text);
        let mut scrambled = letter_units.clone();
        scrambled.shuffle(rng);

        SpellingLevel {
            id: Uuid::new_v4(),
            target_word: entry.display_text.clone(),
            target_word_plain: strip_marks(&entry.display_text),
            glyph: entry.glyph.clone(),
            letter_units,
            scrambled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SystemRandom;
    use crate::vocabulary::Vocabulary;
    use pretty_assertions::assert_eq;

    #[test]
    fn decomposes_nikud_into_units() {
        let word = "בַּיִת";
        let units = decompose(word);
        let bases: Vec<&str> = units.iter().map(|u| u.base_char.as_str()).collect();
        assert_eq!(bases, vec!["ב", "י", "ת"]);
        assert_eq!(units[0].char_with_marks.chars().count(), 3);
        assert_eq!(units[2].char_with_marks, "ת");
        let joined: String = units.iter().map(|u| u.char_with_marks.as_str()).collect();
        assert_eq!(joined, word);
    }

    #[test]
    fn shin_dot_stays_with_its_letter() {
        let units = decompose("שֶׁמֶשׁ");
        assert_eq!(units.len(), 3);
        assert_eq!(units[0].base_char, "ש");
        assert_eq!(units[2].base_char, "ש");
        assert_eq!(units[2].char_with_marks.chars().count(), 2);
    }

    #[test]
    fn strip_marks_removes_nikud_only() {
        assert_eq!(strip_marks("גְּלִידָה"), "גלידה");
        assert_eq!(strip_marks("CAT"), "CAT");
        assert_eq!(letter_count("תַּפּוּחַ"), 4);
    }

    #[test]
    fn unit_ids_are_unique() {
        let units = decompose("תּוּת");
        assert_ne!(units[0].id, units[1].id);
    }

    #[test]
    fn suitable_words_exclude_phrases_and_long_words() {
        let vocabulary = Vocabulary::load().unwrap();
        let generator =
            SpellingGenerator::new(&vocabulary.hebrew, &SpellingSettings::default()).unwrap();
        let words = generator.suitable_words();
        assert!(!words.iter().any(|w| w.display_text == "הַר גַּעַשׁ"));
        assert!(!words.iter().any(|w| w.display_text == "הִיפּוֹפּוֹטָם"));
        assert!(!words.iter().any(|w| w.display_text == "דָּג"));
        assert!(words.iter().any(|w| w.display_text == "בָּנָנָה"));
    }

    #[test]
    fn levels_reconstruct_their_word() {
        let vocabulary = Vocabulary::load().unwrap();
        let generator =
            SpellingGenerator::new(&vocabulary.hebrew, &SpellingSettings::default()).unwrap();
        let mut rng = SystemRandom::seeded(17);
        for _ in 0..200 {
            let level = generator.generate(&mut rng).unwrap();
            let joined: String = level
                .letter_units
                .iter()
                .map(|u| u.char_with_marks.as_str())
                .collect();
            assert_eq!(joined, level.target_word);
            assert_eq!(level.target_word_plain, strip_marks(&level.target_word));
            assert!((3..=6).contains(&level.slot_count()));

            let mut scrambled_ids: Vec<_> = level.scrambled.iter().map(|u| u.id).collect();
            let mut ids: Vec<_> = level.letter_units.iter().map(|u| u.id).collect();
            scrambled_ids.sort();
            ids.sort();
            assert_eq!(scrambled_ids, ids);
        }
    }

    #[test]
    fn empty_selection_is_a_configuration_error() {
        let vocabulary = Vocabulary::load().unwrap();
        let settings = SpellingSettings {
            min_letters: 30,
            max_letters: 40,
            ..Default::default()
        };
        assert!(matches!(
            SpellingGenerator::new(&vocabulary.hebrew, &settings),
            Err(QuizError::Configuration(_))
        ));
    }
}
