//! Local SQLite persistence for stars and settings.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::DbError;
pub use repository::{RewardRepository, SettingsRepository, SqliteRepository};
