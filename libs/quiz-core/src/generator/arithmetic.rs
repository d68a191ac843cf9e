//! Addition and subtraction questions with a counting illustration.

use super::{collect_distractors, shuffled_options, QuestionGenerator};
use crate::error::{QuizError, Result};
use crate::random::RandomSource;
use crate::types::{
    AnswerValue, ArithmeticLevel, ArithmeticVisual, GameKind, Locale, Operator, OptionKind,
    PromptKind, Question, VisualPrompt,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use uuid::Uuid;

/// Distances from the result a distractor may take.
pub const OFFSETS: [i64; 6] = [-3, -2, -1, 1, 2, 3];

#[derive(Debug, Clone)]
pub struct ArithmeticQuestions {
    level: ArithmeticLevel,
    glyphs: Arc<Vec<String>>,
    max_attempts: usize,
}

impl ArithmeticQuestions {
    pub fn new(level: ArithmeticLevel, glyphs: Arc<Vec<String>>, max_attempts: usize) -> Self {
        Self {
            level,
            glyphs,
            max_attempts,
        }
    }

    pub fn level(&self) -> ArithmeticLevel {
        self.level
    }

    /// Draw operands for `operator` keeping the result in `[0, max]`.
    pub fn draw_operands(&self, operator: Operator, rng: &mut dyn RandomSource) -> (u32, u32) {
        let max = self.level.max_value();
        match operator {
            Operator::Add => {
                let a = rng.gen_range(0..=max / 2);
                (a, rng.gen_range(0..=max - a))
            }
            Operator::Sub => {
                let a = rng.gen_range(1..=max);
                (a, rng.gen_range(0..=a))
            }
        }
    }

    /// Build the question for fixed operands.
    pub fn question_for(
        &self,
        operator: Operator,
        a: u32,
        b: u32,
        rng: &mut dyn RandomSource,
    ) -> Result<Question> {
        let max = self.level.max_value();
        let in_range = match operator {
            Operator::Add => a + b <= max,
            Operator::Sub => b <= a && a <= max,
        };
        if !in_range {
            return Err(QuizError::Configuration(format!(
                "{} {} {} is outside 0..={}",
                a,
                operator.symbol(),
                b,
                max
            )));
        }

        let result = operator.apply(a, b);
        let distractors = distractors_for(result, max, self.max_attempts, rng)?;
        let glyph = self
            .glyphs
            .choose(rng)
            .cloned()
            .ok_or_else(|| QuizError::Configuration("no counting glyphs".to_string()))?;

        let options = shuffled_options(
            AnswerValue::Number(result),
            distractors.into_iter().map(AnswerValue::Number).collect(),
            rng,
        );

        Ok(Question {
            id: Uuid::new_v4(),
            kind: GameKind::Math,
            prompt: format!("{} {} {} = ?", a, operator.symbol(), b),
            speech_text: format!("{} {} {}", a, operator.spoken(), b),
            speech_locale: Locale::Primary,
            visual: VisualPrompt::Arithmetic(ArithmeticVisual {
                operand_a: a,
                operator,
                operand_b: b,
                glyph,
            }),
            correct_answer: AnswerValue::Number(result),
            options,
            prompt_kind: PromptKind::Text,
            option_kind: OptionKind::Text,
        })
    }
}

/// Nearby wrong results: `result ± 1..=3`, clamped into `[0, max]`.
pub fn distractors_for(
    result: u32,
    max: u32,
    attempts: usize,
    rng: &mut dyn RandomSource,
) -> Result<Vec<u32>> {
    collect_distractors(&result, attempts, || {
        let offset = OFFSETS.choose(rng)?;
        Some((result as i64 + offset).clamp(0, max as i64) as u32)
    })
}

impl QuestionGenerator for ArithmeticQuestions {
    fn kind(&self) -> GameKind {
        GameKind::Math
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Result<Question> {
        let operator = if rng.gen_bool(0.5) {
            Operator::Add
        } else {
            Operator::Sub
        };
        let (a, b) = self.draw_operands(operator, rng);
        self.question_for(operator, a, b, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SystemRandom;
    use crate::vocabulary::Vocabulary;

    fn generator(level: ArithmeticLevel) -> ArithmeticQuestions {
        ArithmeticQuestions::new(level, Vocabulary::load().unwrap().counting_glyphs, 50)
    }

    #[test]
    fn four_plus_three() {
        let generator = generator(ArithmeticLevel::UpToTen);
        let mut rng = SystemRandom::seeded(8);
        for _ in 0..100 {
            let q = generator.question_for(Operator::Add, 4, 3, &mut rng).unwrap();
            assert_eq!(q.correct_answer, AnswerValue::Number(7));
            assert_eq!(q.prompt, "4 + 3 = ?");
            assert_eq!(q.speech_text, "4 ועוד 3");
            for option in q.options.iter().filter(|o| **o != q.correct_answer) {
                match option {
                    AnswerValue::Number(n) => assert!([4, 5, 6, 8, 9, 10].contains(n)),
                    other => panic!("unexpected option {:?}", other),
                }
            }
        }
    }

    #[test]
    fn results_stay_in_range() {
        for level in [ArithmeticLevel::UpToTen, ArithmeticLevel::UpToTwenty] {
            let generator = generator(level);
            let max = level.max_value();
            let mut rng = SystemRandom::seeded(max as u64);
            for _ in 0..500 {
                let q = generator.generate(&mut rng).unwrap();
                let VisualPrompt::Arithmetic(visual) = &q.visual else {
                    panic!("math question without arithmetic visual");
                };
                match visual.operator {
                    Operator::Add => assert!(visual.operand_a + visual.operand_b <= max),
                    Operator::Sub => assert!(visual.operand_b <= visual.operand_a),
                }
                for option in &q.options {
                    let AnswerValue::Number(n) = option else {
                        panic!("non-numeric option");
                    };
                    assert!(*n <= max);
                }
            }
        }
    }

    #[test]
    fn zero_result_still_finds_distractors() {
        let mut rng = SystemRandom::seeded(12);
        for _ in 0..50 {
            let found = distractors_for(0, 10, 50, &mut rng).unwrap();
            assert!(found.iter().all(|d| (1..=3).contains(d)));
        }
    }

    #[test]
    fn top_of_range_clamps() {
        let mut rng = SystemRandom::seeded(13);
        for _ in 0..50 {
            let found = distractors_for(20, 20, 50, &mut rng).unwrap();
            assert!(found.iter().all(|d| (17..=19).contains(d)));
        }
    }

    #[test]
    fn out_of_range_operands_are_rejected() {
        let generator = generator(ArithmeticLevel::UpToTen);
        let mut rng = SystemRandom::seeded(1);
        assert!(generator.question_for(Operator::Sub, 3, 5, &mut rng).is_err());
        assert!(generator.question_for(Operator::Add, 8, 5, &mut rng).is_err());
    }

    #[test]
    fn both_operators_appear() {
        let generator = generator(ArithmeticLevel::UpToTen);
        let mut rng = SystemRandom::seeded(21);
        let mut adds = 0;
        let mut subs = 0;
        for _ in 0..200 {
            let q = generator.generate(&mut rng).unwrap();
            if let VisualPrompt::Arithmetic(v) = q.visual {
                match v.operator {
                    Operator::Add => adds += 1,
                    Operator::Sub => subs += 1,
                }
            }
        }
        assert!(adds > 50 && subs > 50);
    }
}
