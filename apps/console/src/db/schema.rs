//! SQLite schema definitions.

/// Complete schema for the local database.
pub const SCHEMA: &str = r#"
-- Star counter
CREATE TABLE IF NOT EXISTS reward_counter (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    stars INTEGER NOT NULL DEFAULT 0,
    updated_at TEXT
);

-- Game settings
CREATE TABLE IF NOT EXISTS game_settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    arithmetic_max INTEGER NOT NULL DEFAULT 10,
    auto_dismiss INTEGER NOT NULL DEFAULT 1,
    correct_ms INTEGER NOT NULL DEFAULT 1000,
    incorrect_ms INTEGER NOT NULL DEFAULT 1500,
    min_letters INTEGER NOT NULL DEFAULT 3,
    max_letters INTEGER NOT NULL DEFAULT 6,
    incorrect_reset TEXT NOT NULL DEFAULT 'on_dismiss',
    max_generation_attempts INTEGER NOT NULL DEFAULT 50
);
"#;

/// Initialize the star counter if not exists.
pub const INIT_REWARD_COUNTER: &str = r#"
INSERT OR IGNORE INTO reward_counter (id, stars) VALUES (1, 0);
"#;

/// Initialize game settings if not exists.
pub const INIT_GAME_SETTINGS: &str = r#"
INSERT OR IGNORE INTO game_settings (id) VALUES (1);
"#;
