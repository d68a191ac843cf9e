//! Application state.

use crate::db::SqliteRepository;
use quiz_core::{AudioService, Collaborators, GameSession, Vocabulary};
use std::sync::{Arc, Mutex, MutexGuard};

/// Global application state.
pub struct AppState {
    pub repository: Arc<Mutex<SqliteRepository>>,
    pub vocabulary: Vocabulary,
    pub audio: Arc<dyn AudioService>,
    /// The game on screen, if any. Owned exclusively by the command loop.
    pub game: Option<GameSession>,
}

impl AppState {
    pub fn new(
        repository: SqliteRepository,
        vocabulary: Vocabulary,
        audio: Arc<dyn AudioService>,
    ) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
            vocabulary,
            audio,
            game: None,
        }
    }

    /// Audio plus the star counter backed by the same database handle.
    pub fn collaborators(&self) -> Collaborators {
        Collaborators::new(self.audio.clone(), self.repository.clone())
    }

    pub fn repository(&self) -> MutexGuard<'_, SqliteRepository> {
        match self.repository.lock() {
            Ok(repo) => repo,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
