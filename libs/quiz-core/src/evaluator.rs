//! Answer evaluation for option picks and the spelling board.

use crate::error::{QuizError, Result};
use crate::types::{AnswerValue, LetterUnit, Question, SpellingLevel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of judging an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub is_correct: bool,
}

/// Judge a picked option by strict equality.
pub fn evaluate_option(question: &Question, selected: &AnswerValue) -> Evaluation {
    Evaluation {
        is_correct: *selected == question.correct_answer,
    }
}

/// A pool letter and whether it currently sits in a slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolUnit {
    pub unit: LetterUnit,
    pub consumed: bool,
}

/// Slots plus the scrambled pool for one spelling level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellingBoard {
    target: String,
    slots: Vec<Option<String>>,
    pool: Vec<PoolUnit>,
    evaluated: bool,
}

impl SpellingBoard {
    pub fn new(level: &SpellingLevel) -> Self {
        Self {
            target: level.target_word.clone(),
            slots: vec![None; level.slot_count()],
            pool: level
                .scrambled
                .iter()
                .cloned()
                .map(|unit| PoolUnit {
                    unit,
                    consumed: false,
                })
                .collect(),
            evaluated: false,
        }
    }

    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    pub fn pool(&self) -> &[PoolUnit] {
        &self.pool
    }

    /// Every slot holds a letter.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.as_deref().map_or(false, |c| !c.is_empty()))
    }

    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Slot contents joined in slot order.
    pub fn formed_word(&self) -> String {
        self.slots.iter().flatten().map(String::as_str).collect()
    }

    /// Put a pool letter into a slot. Returns `Ok(false)` when the slot is
    /// already occupied, leaving the board untouched.
    pub fn place(&mut self, unit_id: Uuid, slot: usize) -> Result<bool> {
        if slot >= self.slots.len() {
            return Err(QuizError::invalid_placement(format!(
                "slot {} is out of range (board has {})",
                slot,
                self.slots.len()
            )));
        }
        let index = self
            .pool
            .iter()
            .position(|p| p.unit.id == unit_id)
            .ok_or_else(|| {
                QuizError::invalid_placement(format!("letter {} is not in the pool", unit_id))
            })?;

        if self.slots[slot].is_some() {
            return Ok(false);
        }
        if self.pool[index].consumed {
            return Err(QuizError::invalid_placement(format!(
                "letter {} is already placed",
                unit_id
            )));
        }

        self.pool[index].consumed = true;
        self.slots[slot] = Some(self.pool[index].unit.char_with_marks.clone());
        Ok(true)
    }

    /// Take a letter back out of a slot. The first consumed pool unit showing
    /// the same characters becomes available again.
    pub fn remove(&mut self, slot: usize) -> Result<Option<String>> {
        let content = self
            .slots
            .get_mut(slot)
            .ok_or_else(|| QuizError::invalid_placement(format!("slot {} is out of range", slot)))?
            .take();

        if let Some(chars) = &content {
            if let Some(unit) = self
                .pool
                .iter_mut()
                .find(|p| p.consumed && p.unit.char_with_marks == *chars)
            {
                unit.consumed = false;
            }
            self.evaluated = false;
        }
        Ok(content)
    }

    /// Empty every slot and return all letters to the pool, keeping its order.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.pool.iter_mut().for_each(|p| p.consumed = false);
        self.evaluated = false;
    }

    /// Judge the board once per completion. Returns `None` while incomplete or
    /// when this completion was already judged.
    pub fn take_evaluation(&mut self) -> Option<Evaluation> {
        if self.evaluated || !self.is_complete() {
            return None;
        }
        self.evaluated = true;
        Some(Evaluation {
            is_correct: self.formed_word() == self.target,
        })
    }
}
