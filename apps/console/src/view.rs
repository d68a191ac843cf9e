//! Text rendering of the game screen.

use quiz_core::{
    AnswerValue, FeedbackPhase, GameKind, GameSession, OptionKind, Question, SessionEvent,
    SpellingSession, VisualPrompt,
};
use std::fmt::Write;

/// Home screen listing.
pub fn menu() -> String {
    let mut out = String::from("Games:\n");
    for kind in GameKind::ALL {
        let _ = writeln!(out, "  play {}", kind.as_str());
    }
    out.push_str("Other: stars, level <10|20>, auto <on|off>, help, quit\n");
    out
}

pub fn help() -> String {
    [
        "play <game>        start a game",
        "pick <n>           choose option n",
        "drop <letter> <slot>  put pool letter into a slot",
        "tap <letter>       put pool letter into the first empty slot",
        "remove <slot>      take a letter back",
        "ok                 dismiss feedback",
        "speak              hear the prompt again",
        "snapshot           dump the game state as JSON",
        "back               return to the menu",
    ]
    .join("\n")
}

/// Full screen for the active game.
pub fn render(session: &GameSession) -> String {
    let body = match session {
        GameSession::Quiz(quiz) => question(quiz.question()),
        GameSession::Spelling(spelling) => board(spelling),
    };
    match session.phase() {
        FeedbackPhase::None => body,
        phase => format!("{}\n{}", body, feedback(phase)),
    }
}

pub fn question(q: &Question) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {}", q.prompt);
    if let Some(visual) = visual(&q.visual) {
        let _ = writeln!(out, "  {}", visual);
    }
    for (i, option) in q.options.iter().enumerate() {
        let _ = writeln!(out, "  [{}] {}", i + 1, option_label(option, q.option_kind));
    }
    out
}

fn option_label(option: &AnswerValue, kind: OptionKind) -> String {
    match kind {
        OptionKind::Color => format!("■ {}", option),
        OptionKind::Text | OptionKind::Image => option.to_string(),
    }
}

fn visual(visual: &VisualPrompt) -> Option<String> {
    match visual {
        VisualPrompt::NoVisual => None,
        VisualPrompt::Glyph(glyph) => Some(glyph.clone()),
        VisualPrompt::Arithmetic(v) => Some(format!(
            "{} {} {}",
            v.glyph.repeat(v.operand_a as usize),
            v.operator.symbol(),
            v.glyph.repeat(v.operand_b as usize)
        )),
    }
}

pub fn board(session: &SpellingSession) -> String {
    let board = session.board();
    let mut out = String::new();
    let _ = writeln!(out, "  {}", session.level().glyph);

    let slots: Vec<String> = board
        .slots()
        .iter()
        .enumerate()
        .map(|(i, s)| match s {
            Some(c) => format!("{}:{}", i + 1, c),
            None => format!("{}:_", i + 1),
        })
        .collect();
    let _ = writeln!(out, "  slots  {}", slots.join("  "));

    let pool: Vec<String> = board
        .pool()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if p.consumed {
                format!("{}:·", i + 1)
            } else {
                format!("{}:{}", i + 1, p.unit.char_with_marks)
            }
        })
        .collect();
    let _ = writeln!(out, "  letters {}", pool.join("  "));
    out
}

pub fn feedback(phase: FeedbackPhase) -> &'static str {
    match phase {
        FeedbackPhase::Correct => "✅ !כל הכבוד",
        FeedbackPhase::Incorrect => "❌ נסו שוב",
        FeedbackPhase::None => "",
    }
}

/// One line per event worth showing.
pub fn events(events: &[SessionEvent]) -> String {
    events
        .iter()
        .filter_map(|e| match e {
            SessionEvent::RewardEarned { total } => Some(format!("⭐ x {}", total)),
            SessionEvent::CelebrationRequested => Some("🎉🎉🎉".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
