//! Vocabulary tables.
//!
//! Tables are built once from the static data in [`data`] and validated at
//! load; a table too small to yield two distinct distractors is rejected
//! before any question is generated.

pub mod data;

use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Distinct glyphs a table must supply: one answer plus two distractors.
pub const MIN_DISTINCT_GLYPHS: usize = 3;

/// One word with its narration text and picture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub display_text: String,
    pub audio_text: String,
    pub glyph: String,
}

impl VocabularyEntry {
    pub fn new(display_text: &str, glyph: &str) -> Self {
        Self {
            display_text: display_text.to_string(),
            audio_text: display_text.to_string(),
            glyph: glyph.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Category {
    symbol: String,
    entries: Vec<VocabularyEntry>,
}

/// Read-only entries keyed by category symbol (a letter or a topic).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyTable {
    name: String,
    categories: Vec<Category>,
}

impl VocabularyTable {
    /// Build and validate a table.
    pub fn new(name: &str, categories: Vec<(String, Vec<VocabularyEntry>)>) -> Result<Self> {
        let table = Self {
            name: name.to_string(),
            categories: categories
                .into_iter()
                .map(|(symbol, entries)| Category { symbol, entries })
                .collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Build from one of the static tables in [`data`].
    pub fn from_static(name: &str, rows: &[(&str, &[(&str, &str)])]) -> Result<Self> {
        let categories = rows
            .iter()
            .map(|(symbol, words)| {
                let entries = words
                    .iter()
                    .map(|(text, glyph)| VocabularyEntry::new(text, glyph))
                    .collect();
                (symbol.to_string(), entries)
            })
            .collect();
        Self::new(name, categories)
    }

    fn validate(&self) -> Result<()> {
        if let Some(empty) = self.categories.iter().find(|c| c.entries.is_empty()) {
            return Err(QuizError::Configuration(format!(
                "table '{}' has no entries for category '{}'",
                self.name, empty.symbol
            )));
        }

        let glyphs: HashSet<&str> = self.entries().map(|e| e.glyph.as_str()).collect();
        if glyphs.len() < MIN_DISTINCT_GLYPHS {
            return Err(QuizError::Configuration(format!(
                "table '{}' has {} distinct glyphs, at least {} are required",
                self.name,
                glyphs.len(),
                MIN_DISTINCT_GLYPHS
            )));
        }
        Ok(())
    }

    /// Every category must have at least `needed` distinct glyphs that do
    /// not also appear among its own entries.
    pub fn ensure_foreign_glyphs(&self, needed: usize) -> Result<()> {
        for category in &self.categories {
            let own: HashSet<&str> = category.entries.iter().map(|e| e.glyph.as_str()).collect();
            let foreign: HashSet<&str> = self
                .categories
                .iter()
                .filter(|c| c.symbol != category.symbol)
                .flat_map(|c| c.entries.iter())
                .map(|e| e.glyph.as_str())
                .filter(|g| !own.contains(g))
                .collect();
            if foreign.len() < needed {
                return Err(QuizError::Configuration(format!(
                    "table '{}': category '{}' has {} pictures from other categories, \
                     at least {} are required",
                    self.name,
                    category.symbol,
                    foreign.len(),
                    needed
                )));
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries for one category.
    pub fn lookup(&self, category: &str) -> Option<&[VocabularyEntry]> {
        self.categories
            .iter()
            .find(|c| c.symbol == category)
            .map(|c| c.entries.as_slice())
    }

    /// Category symbols in table order.
    pub fn all_categories(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.symbol.as_str()).collect()
    }

    /// Every entry across categories.
    pub fn entries(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.categories.iter().flat_map(|c| c.entries.iter())
    }

    /// Entries flattened into one list.
    pub fn flatten(&self) -> Vec<VocabularyEntry> {
        self.entries().cloned().collect()
    }
}

/// All tables the games draw from.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub hebrew: Arc<VocabularyTable>,
    pub english: Arc<VocabularyTable>,
    pub colors: Arc<VocabularyTable>,
    pub counting_glyphs: Arc<Vec<String>>,
}

impl Vocabulary {
    /// Load and validate the built-in tables.
    pub fn load() -> Result<Self> {
        let hebrew = VocabularyTable::from_static("hebrew", data::HEBREW_WORDS)?;
        // letter-match draws its wrong answers from the other letters
        hebrew.ensure_foreign_glyphs(MIN_DISTINCT_GLYPHS - 1)?;
        let english = VocabularyTable::from_static("english", data::ENGLISH_WORDS)?;
        let colors = VocabularyTable::new(
            "colors",
            vec![(
                "colors".to_string(),
                data::ENGLISH_COLORS
                    .iter()
                    .map(|(name, swatch)| VocabularyEntry::new(name, swatch))
                    .collect(),
            )],
        )?;
        if data::COUNTING_GLYPHS.is_empty() {
            return Err(QuizError::Configuration(
                "no counting glyphs configured".to_string(),
            ));
        }

        Ok(Self {
            hebrew: Arc::new(hebrew),
            english: Arc::new(english),
            colors: Arc::new(colors),
            counting_glyphs: Arc::new(
                data::COUNTING_GLYPHS
                    .iter()
                    .map(|g| g.to_string())
                    .collect(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_load() {
        let vocab = Vocabulary::load().unwrap();
        assert_eq!(vocab.hebrew.all_categories().len(), 22);
        assert!(vocab.english.entries().count() > 50);
        assert_eq!(vocab.colors.entries().count(), 9);
    }

    #[test]
    fn lookup_by_letter() {
        let vocab = Vocabulary::load().unwrap();
        let bet = vocab.hebrew.lookup("ב").unwrap();
        assert!(bet.iter().any(|e| e.glyph == "🍌"));
        assert!(vocab.hebrew.lookup("x").is_none());
    }

    #[test]
    fn rejects_too_few_glyphs() {
        let result = VocabularyTable::new(
            "tiny",
            vec![
                ("a".to_string(), vec![VocabularyEntry::new("A", "🍎")]),
                ("b".to_string(), vec![VocabularyEntry::new("B", "🍌")]),
            ],
        );
        assert!(matches!(result, Err(QuizError::Configuration(_))));
    }

    #[test]
    fn duplicate_glyphs_do_not_count_twice() {
        let result = VocabularyTable::new(
            "dupes",
            vec![(
                "a".to_string(),
                vec![
                    VocabularyEntry::new("A", "🍎"),
                    VocabularyEntry::new("B", "🍎"),
                    VocabularyEntry::new("C", "🍌"),
                ],
            )],
        );
        assert!(matches!(result, Err(QuizError::Configuration(_))));
    }

    #[test]
    fn rejects_empty_category() {
        let result = VocabularyTable::new(
            "holes",
            vec![
                ("a".to_string(), vec![
                    VocabularyEntry::new("A", "🍎"),
                    VocabularyEntry::new("B", "🍌"),
                    VocabularyEntry::new("C", "🍊"),
                ]),
                ("b".to_string(), vec![]),
            ],
        );
        assert!(matches!(result, Err(QuizError::Configuration(_))));
    }

    #[test]
    fn foreign_glyphs_exclude_the_category_itself() {
        let table = VocabularyTable::new(
            "shared",
            vec![
                ("a".to_string(), vec![
                    VocabularyEntry::new("A1", "🍎"),
                    VocabularyEntry::new("A2", "🍌"),
                ]),
                ("b".to_string(), vec![
                    VocabularyEntry::new("B1", "🍎"),
                    VocabularyEntry::new("B2", "🍊"),
                ]),
            ],
        )
        .unwrap();
        // 'a' only has 🍊 from elsewhere, 🍎 is its own
        assert!(matches!(
            table.ensure_foreign_glyphs(2),
            Err(QuizError::Configuration(_))
        ));
        assert!(table.ensure_foreign_glyphs(1).is_ok());

        let vocab = Vocabulary::load().unwrap();
        assert!(vocab.hebrew.ensure_foreign_glyphs(2).is_ok());
    }
}
