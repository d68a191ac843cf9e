//! Core types for the quiz engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Game modes offered on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    Letters,
    English,
    Math,
    Colors,
    Spelling,
}

impl GameKind {
    /// All games, in menu order.
    pub const ALL: [GameKind; 5] = [
        Self::Letters,
        Self::Math,
        Self::English,
        Self::Colors,
        Self::Spelling,
    ];

    /// Get the game name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Letters => "letters",
            Self::English => "english",
            Self::Math => "math",
            Self::Colors => "colors",
            Self::Spelling => "spelling",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "letters" | "hebrew" => Some(Self::Letters),
            "english" => Some(Self::English),
            "math" => Some(Self::Math),
            "colors" => Some(Self::Colors),
            "spelling" => Some(Self::Spelling),
            _ => None,
        }
    }
}

/// Speech locale. The data only ever uses these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Hebrew (he-IL).
    Primary,
    /// English (en-US).
    Secondary,
}

impl Locale {
    /// BCP-47 tag handed to speech engines.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Primary => "he-IL",
            Self::Secondary => "en-US",
        }
    }
}

/// Short audio cue played after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Success,
    Failure,
}

/// An option value: either text (emoji, word, colour swatch) or a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(u32),
    Text(String),
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for AnswerValue {
    fn from(value: u32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    Text,
}

/// How options are meant to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    Text,
    Image,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Sub,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
        }
    }

    /// Spoken Hebrew connective.
    pub fn spoken(&self) -> &'static str {
        match self {
            Self::Add => "ועוד",
            Self::Sub => "פחות",
        }
    }

    pub fn apply(&self, a: u32, b: u32) -> u32 {
        match self {
            Self::Add => a + b,
            Self::Sub => a.saturating_sub(b),
        }
    }
}

/// Counting-objects illustration for an arithmetic question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticVisual {
    pub operand_a: u32,
    pub operator: Operator,
    pub operand_b: u32,
    pub glyph: String,
}

/// Secondary visual aid shown with a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum VisualPrompt {
    NoVisual,
    Glyph(String),
    Arithmetic(ArithmeticVisual),
}

impl Default for VisualPrompt {
    fn default() -> Self {
        Self::NoVisual
    }
}

/// A generated multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub kind: GameKind,
    pub prompt: String,
    pub speech_text: String,
    pub speech_locale: Locale,
    pub visual: VisualPrompt,
    pub correct_answer: AnswerValue,
    pub options: Vec<AnswerValue>,
    pub prompt_kind: PromptKind,
    pub option_kind: OptionKind,
}

impl Question {
    /// Position of the correct answer among the options.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_answer)
    }
}

/// One placeable piece of a spelling word: a base letter plus its marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterUnit {
    pub id: Uuid,
    pub base_char: String,
    pub char_with_marks: String,
}

/// A spelling puzzle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellingLevel {
    pub id: Uuid,
    pub target_word: String,
    pub target_word_plain: String,
    pub glyph: String,
    /// Units in word order.
    pub letter_units: Vec<LetterUnit>,
    /// The same units in the order the player sees them.
    pub scrambled: Vec<LetterUnit>,
}

impl SpellingLevel {
    pub fn slot_count(&self) -> usize {
        self.letter_units.len()
    }
}

/// Feedback phase of an active game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackPhase {
    None,
    Correct,
    Incorrect,
}

impl Default for FeedbackPhase {
    fn default() -> Self {
        Self::None
    }
}

impl FeedbackPhase {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Difficulty bound for arithmetic questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArithmeticLevel {
    #[serde(rename = "up_to_10")]
    UpToTen,
    #[serde(rename = "up_to_20")]
    UpToTwenty,
}

impl Default for ArithmeticLevel {
    fn default() -> Self {
        Self::UpToTen
    }
}

impl ArithmeticLevel {
    /// Largest operand sum / minuend allowed.
    pub fn max_value(&self) -> u32 {
        match self {
            Self::UpToTen => 10,
            Self::UpToTwenty => 20,
        }
    }

    pub fn from_max(max: u32) -> Option<Self> {
        match max {
            10 => Some(Self::UpToTen),
            20 => Some(Self::UpToTwenty),
            _ => None,
        }
    }
}

/// When a wrong spelling attempt clears the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncorrectReset {
    /// Clear the slots when the feedback is acknowledged.
    OnDismiss,
    /// Clear the slots as soon as the attempt is judged wrong.
    Immediately,
}

impl Default for IncorrectReset {
    fn default() -> Self {
        Self::OnDismiss
    }
}

impl IncorrectReset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnDismiss => "on_dismiss",
            Self::Immediately => "immediately",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "on_dismiss" => Some(Self::OnDismiss),
            "immediately" => Some(Self::Immediately),
            _ => None,
        }
    }
}

/// Feedback acknowledgement policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackPolicy {
    pub auto_dismiss: bool,
    pub correct_ms: u64,
    pub incorrect_ms: u64,
}

impl Default for FeedbackPolicy {
    fn default() -> Self {
        Self {
            auto_dismiss: true,
            correct_ms: 1000,
            incorrect_ms: 1500,
        }
    }
}

impl FeedbackPolicy {
    /// How long a phase stays on screen before it dismisses itself.
    pub fn dismiss_after(&self, phase: FeedbackPhase) -> Option<Duration> {
        if !self.auto_dismiss {
            return None;
        }
        match phase {
            FeedbackPhase::None => None,
            FeedbackPhase::Correct => Some(Duration::from_millis(self.correct_ms)),
            FeedbackPhase::Incorrect => Some(Duration::from_millis(self.incorrect_ms)),
        }
    }
}

/// Spelling word selection and reset policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellingSettings {
    pub min_letters: usize,
    pub max_letters: usize,
    pub incorrect_reset: IncorrectReset,
}

impl Default for SpellingSettings {
    fn default() -> Self {
        Self {
            min_letters: 3,
            max_letters: 6,
            incorrect_reset: IncorrectReset::default(),
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSettings {
    pub arithmetic_level: ArithmeticLevel,
    pub feedback: FeedbackPolicy,
    pub spelling: SpellingSettings,
    /// Sampling attempts allowed before giving up on distractors.
    pub max_generation_attempts: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            arithmetic_level: ArithmeticLevel::default(),
            feedback: FeedbackPolicy::default(),
            spelling: SpellingSettings::default(),
            max_generation_attempts: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_kind_round_trips_through_str() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(GameKind::from_str("hebrew"), Some(GameKind::Letters));
        assert_eq!(GameKind::from_str("chess"), None);
    }

    #[test]
    fn answer_values_compare_strictly() {
        assert_ne!(AnswerValue::from(7u32), AnswerValue::from("7"));
        assert_eq!(AnswerValue::from("🐟"), AnswerValue::Text("🐟".into()));
        assert_eq!(AnswerValue::from(12u32).to_string(), "12");
    }

    #[test]
    fn dismiss_durations_follow_policy() {
        let policy = FeedbackPolicy::default();
        assert_eq!(
            policy.dismiss_after(FeedbackPhase::Correct),
            Some(Duration::from_millis(1000))
        );
        assert_eq!(
            policy.dismiss_after(FeedbackPhase::Incorrect),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(policy.dismiss_after(FeedbackPhase::None), None);

        let manual = FeedbackPolicy {
            auto_dismiss: false,
            ..Default::default()
        };
        assert_eq!(manual.dismiss_after(FeedbackPhase::Correct), None);
    }

    #[test]
    fn visual_prompt_serializes_tagged() {
        let visual = VisualPrompt::Arithmetic(ArithmeticVisual {
            operand_a: 4,
            operator: Operator::Add,
            operand_b: 3,
            glyph: "🍎".into(),
        });
        let json = serde_json::to_value(&visual).unwrap();
        assert_eq!(json["type"], "arithmetic");
        assert_eq!(json["value"]["operator"], "add");
        assert_eq!(json["value"]["operand_a"], 4);
    }

    #[test]
    fn arithmetic_level_bounds() {
        assert_eq!(ArithmeticLevel::UpToTen.max_value(), 10);
        assert_eq!(ArithmeticLevel::from_max(20), Some(ArithmeticLevel::UpToTwenty));
        assert_eq!(ArithmeticLevel::from_max(15), None);
    }
}
