//! Settings and reward commands.

use super::CommandError;
use crate::db::{RewardRepository, SettingsRepository};
use crate::state::AppState;
use quiz_core::{ArithmeticLevel, GameSettings};

/// Get the star total.
pub fn get_stars(state: &AppState) -> Result<u64, CommandError> {
    state.repository().get_stars().map_err(Into::into)
}

pub fn get_settings(state: &AppState) -> Result<GameSettings, CommandError> {
    state.repository().get_game_settings().map_err(Into::into)
}

fn update(state: &AppState, change: impl FnOnce(&mut GameSettings)) -> Result<(), CommandError> {
    let repo = state.repository();
    let mut settings = repo.get_game_settings()?;
    change(&mut settings);
    repo.save_game_settings(&settings)?;
    tracing::info!(?settings, "settings saved");
    Ok(())
}

/// Takes effect from the next game entered.
pub fn set_arithmetic_level(state: &AppState, level: ArithmeticLevel) -> Result<(), CommandError> {
    update(state, |s| s.arithmetic_level = level)
}

/// Takes effect from the next game entered.
pub fn set_auto_dismiss(state: &AppState, on: bool) -> Result<(), CommandError> {
    update(state, |s| s.feedback.auto_dismiss = on)
}
