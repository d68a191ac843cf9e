//! Repository pattern for database access.

use crate::db::error::DbError;
use chrono::{DateTime, Utc};
use quiz_core::{
    ArithmeticLevel, FeedbackPolicy, GameSettings, IncorrectReset, RewardStore, SpellingSettings,
    StoreError,
};
use rusqlite::{params, Connection};
use std::path::Path;

type Result<T> = std::result::Result<T, DbError>;

/// Repository for the star counter.
pub trait RewardRepository {
    fn get_stars(&self) -> Result<u64>;
    fn set_stars(&self, stars: u64) -> Result<()>;
    /// When the counter last changed, if ever.
    fn stars_updated_at(&self) -> Result<Option<DateTime<Utc>>>;
}

/// Repository for game settings.
pub trait SettingsRepository {
    fn get_game_settings(&self) -> Result<GameSettings>;
    fn save_game_settings(&self, settings: &GameSettings) -> Result<()>;
}

/// SQLite implementation of repositories.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open database at path, creating if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(super::schema::SCHEMA)?;
        self.conn.execute_batch(super::schema::INIT_REWARD_COUNTER)?;
        self.conn.execute_batch(super::schema::INIT_GAME_SETTINGS)?;
        Ok(())
    }
}

/// Raw `game_settings` row before range checks.
struct SettingsRow {
    arithmetic_max: i64,
    auto_dismiss: bool,
    correct_ms: i64,
    incorrect_ms: i64,
    min_letters: i64,
    max_letters: i64,
    incorrect_reset: String,
    max_generation_attempts: i64,
}

fn to_unsigned(value: i64, column: &str) -> Result<u64> {
    u64::try_from(value)
        .map_err(|_| DbError::InvalidData(format!("negative {}: {}", column, value)))
}

fn to_signed(value: u64, column: &str) -> Result<i64> {
    i64::try_from(value)
        .map_err(|_| DbError::InvalidData(format!("{} too large: {}", column, value)))
}

impl RewardRepository for SqliteRepository {
    fn get_stars(&self) -> Result<u64> {
        let stars: i64 = self
            .conn
            .query_row("SELECT stars FROM reward_counter WHERE id = 1", [], |row| row.get(0))?;
        to_unsigned(stars, "stars")
    }

    fn set_stars(&self, stars: u64) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "UPDATE reward_counter SET stars = ?1, updated_at = ?2 WHERE id = 1",
            params![to_signed(stars, "stars")?, now],
        )?;
        Ok(())
    }

    fn stars_updated_at(&self) -> Result<Option<DateTime<Utc>>> {
        let raw: Option<String> = self.conn.query_row(
            "SELECT updated_at FROM reward_counter WHERE id = 1",
            [],
            |row| row.get(0),
        )?;
        raw.map(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| DbError::InvalidData(format!("updated_at '{}': {}", s, e)))
        })
        .transpose()
    }
}

impl RewardStore for SqliteRepository {
    fn get_count(&self) -> std::result::Result<u64, StoreError> {
        self.get_stars().map_err(|e| StoreError(e.to_string()))
    }

    fn set_count(&mut self, count: u64) -> std::result::Result<(), StoreError> {
        self.set_stars(count).map_err(|e| StoreError(e.to_string()))
    }
}

impl SettingsRepository for SqliteRepository {
    fn get_game_settings(&self) -> Result<GameSettings> {
        let row = self.conn.query_row(
            "SELECT arithmetic_max, auto_dismiss, correct_ms, incorrect_ms, min_letters,
                    max_letters, incorrect_reset, max_generation_attempts
             FROM game_settings WHERE id = 1",
            [],
            |row| {
                Ok(SettingsRow {
                    arithmetic_max: row.get(0)?,
                    auto_dismiss: row.get(1)?,
                    correct_ms: row.get(2)?,
                    incorrect_ms: row.get(3)?,
                    min_letters: row.get(4)?,
                    max_letters: row.get(5)?,
                    incorrect_reset: row.get(6)?,
                    max_generation_attempts: row.get(7)?,
                })
            },
        )?;

        let arithmetic_level = u32::try_from(row.arithmetic_max)
            .ok()
            .and_then(ArithmeticLevel::from_max)
            .ok_or_else(|| {
                DbError::InvalidData(format!("arithmetic_max {}", row.arithmetic_max))
            })?;

        Ok(GameSettings {
            arithmetic_level,
            feedback: FeedbackPolicy {
                auto_dismiss: row.auto_dismiss,
                correct_ms: to_unsigned(row.correct_ms, "correct_ms")?,
                incorrect_ms: to_unsigned(row.incorrect_ms, "incorrect_ms")?,
            },
            spelling: SpellingSettings {
                min_letters: to_unsigned(row.min_letters, "min_letters")? as usize,
                max_letters: to_unsigned(row.max_letters, "max_letters")? as usize,
                incorrect_reset: IncorrectReset::from_str(&row.incorrect_reset)
                    .unwrap_or_default(),
            },
            max_generation_attempts: to_unsigned(
                row.max_generation_attempts,
                "max_generation_attempts",
            )? as usize,
        })
    }

    fn save_game_settings(&self, settings: &GameSettings) -> Result<()> {
        self.conn.execute(
            "UPDATE game_settings SET arithmetic_max = ?1, auto_dismiss = ?2, correct_ms = ?3,
                    incorrect_ms = ?4, min_letters = ?5, max_letters = ?6, incorrect_reset = ?7,
                    max_generation_attempts = ?8
             WHERE id = 1",
            params![
                settings.arithmetic_level.max_value(),
                settings.feedback.auto_dismiss,
                to_signed(settings.feedback.correct_ms, "correct_ms")?,
                to_signed(settings.feedback.incorrect_ms, "incorrect_ms")?,
                to_signed(settings.spelling.min_letters as u64, "min_letters")?,
                to_signed(settings.spelling.max_letters as u64, "max_letters")?,
                settings.spelling.incorrect_reset.as_str(),
                to_signed(settings.max_generation_attempts as u64, "max_generation_attempts")?,
            ],
        )?;
        Ok(())
    }
}
