//! Game commands: entering, answering, spelling and dismissing feedback.

use super::CommandError;
use crate::db::{RewardRepository, SettingsRepository};
use crate::state::AppState;
use quiz_core::{
    FeedbackPhase, GameKind, GameSession, Question, SessionEvent, SpellingBoard, SpellingLevel,
    SpellingSession, SystemRandom,
};
use serde::Serialize;
use uuid::Uuid;

/// JSON view of the active game.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub game: GameKind,
    pub phase: FeedbackPhase,
    pub feedback_seq: u64,
    pub stars: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<&'a Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<&'a SpellingLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<&'a SpellingBoard>,
}

fn active(state: &mut AppState) -> Result<&mut GameSession, CommandError> {
    state
        .game
        .as_mut()
        .ok_or_else(|| CommandError::new("no game running, try 'play <game>'"))
}

fn spelling(state: &mut AppState) -> Result<&mut SpellingSession, CommandError> {
    match active(state)? {
        GameSession::Spelling(session) => Ok(session),
        GameSession::Quiz(_) => Err(CommandError::new("that only works in the spelling game")),
    }
}

/// Pool position to unit id.
fn pool_unit(session: &SpellingSession, letter: usize) -> Option<Uuid> {
    session.board().pool().get(letter).map(|p| p.unit.id)
}

/// Start a game with the stored settings, replacing any running one.
pub fn enter_game(state: &mut AppState, kind: GameKind) -> Result<Vec<SessionEvent>, CommandError> {
    let settings = state.repository().get_game_settings()?;
    let session = GameSession::enter(
        kind,
        &state.vocabulary,
        &settings,
        state.collaborators(),
        Box::new(SystemRandom::new()),
    )?;
    tracing::info!(game = kind.as_str(), "game started");
    session.speak();
    state.game = Some(session);
    Ok(Vec::new())
}

pub fn exit_game(state: &mut AppState) {
    if let Some(game) = state.game.take() {
        tracing::info!(game = game.kind().as_str(), "game left");
    }
}

pub fn pick_option(state: &mut AppState, index: usize) -> Result<Vec<SessionEvent>, CommandError> {
    match active(state)? {
        GameSession::Quiz(session) => Ok(session.submit_index(index)),
        GameSession::Spelling(_) => Err(CommandError::new("use drop or tap to spell")),
    }
}

pub fn drop_letter(
    state: &mut AppState,
    letter: usize,
    slot: usize,
) -> Result<Vec<SessionEvent>, CommandError> {
    let session = spelling(state)?;
    match pool_unit(session, letter) {
        Some(id) => Ok(session.drop_letter(id, slot)),
        None => {
            tracing::debug!(letter, "no such pool letter");
            Ok(Vec::new())
        }
    }
}

pub fn tap_letter(state: &mut AppState, letter: usize) -> Result<Vec<SessionEvent>, CommandError> {
    let session = spelling(state)?;
    match pool_unit(session, letter) {
        Some(id) => Ok(session.tap_letter(id)),
        None => Ok(Vec::new()),
    }
}

pub fn remove_letter(state: &mut AppState, slot: usize) -> Result<Vec<SessionEvent>, CommandError> {
    Ok(spelling(state)?.remove_letter(slot))
}

/// Manual dismissal of the feedback on screen.
pub fn acknowledge(state: &mut AppState) -> Result<Vec<SessionEvent>, CommandError> {
    let events = active(state)?.acknowledge()?;
    narrate_new_prompt(state, &events);
    Ok(events)
}

/// Timer-driven dismissal. Nothing happens if the game is gone or the
/// feedback the timer was armed for has already been dismissed.
pub fn acknowledge_timeout(
    state: &mut AppState,
    seq: u64,
) -> Result<Vec<SessionEvent>, CommandError> {
    let Some(game) = state.game.as_mut() else {
        return Ok(Vec::new());
    };
    let events = game.acknowledge_timeout(seq)?;
    narrate_new_prompt(state, &events);
    Ok(events)
}

fn narrate_new_prompt(state: &AppState, events: &[SessionEvent]) {
    if events
        .iter()
        .any(|e| matches!(e, SessionEvent::QuestionChanged { .. }))
    {
        if let Some(game) = &state.game {
            game.speak();
        }
    }
}

pub fn speak(state: &mut AppState) -> Result<(), CommandError> {
    active(state)?.speak();
    Ok(())
}

pub fn snapshot(state: &mut AppState) -> Result<String, CommandError> {
    let stars = state.repository().get_stars()?;
    let game = state
        .game
        .as_ref()
        .ok_or_else(|| CommandError::new("no game running"))?;

    let (question, level, board) = match game {
        GameSession::Quiz(s) => (Some(s.question()), None, None),
        GameSession::Spelling(s) => (None, Some(s.level()), Some(s.board())),
    };
    let snapshot = Snapshot {
        game: game.kind(),
        phase: game.phase(),
        feedback_seq: game.feedback_seq(),
        stars,
        question,
        level,
        board,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}
