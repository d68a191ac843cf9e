pub mod audio;
pub mod commands;
pub mod db;
pub mod state;
pub mod timer;
pub mod view;

use commands::{Command, Reply};
use db::SqliteRepository;
use quiz_core::{SessionEvent, Vocabulary};
use state::AppState;
use std::path::PathBuf;
use timer::DismissTimer;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn get_db_path() -> PathBuf {
    if let Ok(path) = std::env::var("QUIZ_DB_PATH") {
        return PathBuf::from(path);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kids-quiz")
        .join("quiz.db")
}

/// Command loop state: the app plus its dismiss timer.
pub struct Console {
    pub state: AppState,
    timer: DismissTimer,
}

impl Console {
    pub fn new(state: AppState, timeouts: mpsc::UnboundedSender<u64>) -> Self {
        Self {
            state,
            timer: DismissTimer::new(timeouts),
        }
    }

    /// Run one input line. `None` means the player asked to quit.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return Some(String::new());
        }
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => return Some(format!("! {}", e)),
        };
        let starting = matches!(command, Command::Play(_));
        match commands::execute(&mut self.state, command) {
            Ok(Reply::Events(events)) => {
                if starting {
                    // the previous game has been replaced
                    self.timer.cancel();
                }
                Some(self.after_events(&events))
            }
            Ok(Reply::Text(text)) => Some(text),
            Ok(Reply::Menu) => {
                self.timer.cancel();
                Some(view::menu())
            }
            Ok(Reply::Quit) => {
                self.timer.cancel();
                None
            }
            Err(e) => Some(format!("! {}", e)),
        }
    }

    /// Deliver a fired timer.
    pub fn handle_timeout(&mut self, seq: u64) -> String {
        match commands::game::acknowledge_timeout(&mut self.state, seq) {
            Ok(events) if events.is_empty() => String::new(),
            Ok(events) => self.after_events(&events),
            Err(e) => {
                tracing::error!(error = %e, "auto dismiss failed");
                format!("! {}", e)
            }
        }
    }

    pub fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Keep the timer in step with the feedback phase, then draw.
    fn after_events(&mut self, events: &[SessionEvent]) -> String {
        let Some(game) = &self.state.game else {
            return String::new();
        };
        if events.iter().any(|e| matches!(e, SessionEvent::FeedbackShown { .. })) {
            match game.dismiss_after() {
                Some(delay) => self.timer.arm(delay, game.feedback_seq()),
                None => self.timer.cancel(),
            }
        } else if events.contains(&SessionEvent::FeedbackCleared) {
            self.timer.cancel();
        }

        let notes = view::events(events);
        let screen = view::render(game);
        if notes.is_empty() {
            screen
        } else {
            format!("{}\n{}", notes, screen)
        }
    }
}

fn print(text: &str) {
    if !text.is_empty() {
        println!("{}", text);
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let vocabulary = Vocabulary::load()?;

    // Ensure data directory exists
    let db_path = get_db_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    tracing::info!(path = %db_path.display(), "opening database");
    let repository = SqliteRepository::open(&db_path)?;

    let state = AppState::new(repository, vocabulary, audio::from_env());
    let (tx, mut timeouts) = mpsc::unbounded_channel();
    let mut console = Console::new(state, tx);

    print(&view::menu());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match console.handle_line(&line) {
                    Some(output) => print(&output),
                    None => break,
                }
            }
            Some(seq) = timeouts.recv() => print(&console.handle_timeout(seq)),
        }
    }

    tracing::info!("bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SettingsRepository;
    use quiz_core::{FeedbackPhase, GameKind, GameSession, SilentAudio};
    use std::sync::Arc;
    use std::time::Duration;

    fn console() -> (Console, mpsc::UnboundedReceiver<u64>) {
        let state = AppState::new(
            SqliteRepository::open_in_memory().unwrap(),
            Vocabulary::load().unwrap(),
            Arc::new(SilentAudio),
        );
        let (tx, rx) = mpsc::unbounded_channel();
        (Console::new(state, tx), rx)
    }

    fn option_indices(console: &Console) -> (usize, usize) {
        match console.state.game.as_ref().unwrap() {
            GameSession::Quiz(q) => {
                let right = q.question().correct_index().unwrap();
                (right, (right + 1) % 3)
            }
            GameSession::Spelling(_) => panic!("not a quiz"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn wrong_answer_dismisses_itself() {
        let (mut console, mut rx) = console();
        console.handle_line("play math").unwrap();
        let (_, wrong) = option_indices(&console);
        console.handle_line(&format!("pick {}", wrong + 1)).unwrap();
        assert!(console.timer_armed());

        let seq = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        console.handle_timeout(seq);
        assert_eq!(console.state.game.as_ref().unwrap().phase(), FeedbackPhase::None);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_dismiss_cancels_timer() {
        let (mut console, mut rx) = console();
        console.handle_line("play letters").unwrap();
        let (right, _) = option_indices(&console);
        let screen = console.handle_line(&format!("pick {}", right + 1)).unwrap();
        assert!(screen.contains("⭐ x 1"));

        console.handle_line("ok").unwrap();
        assert!(!console.timer_armed());
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn leaving_the_game_cancels_timer() {
        let (mut console, mut rx) = console();
        console.handle_line("play colors").unwrap();
        let (_, wrong) = option_indices(&console);
        console.handle_line(&format!("pick {}", wrong + 1)).unwrap();
        console.handle_line("back").unwrap();
        assert!(console.state.game.is_none());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn manual_mode_never_arms() {
        let (mut console, _rx) = console();
        console.handle_line("auto off").unwrap();
        console.handle_line("play english").unwrap();
        let (_, wrong) = option_indices(&console);
        console.handle_line(&format!("pick {}", wrong + 1)).unwrap();
        assert!(!console.timer_armed());
        assert_eq!(
            console.state.game.as_ref().unwrap().phase(),
            FeedbackPhase::Incorrect
        );
    }

    #[tokio::test(start_paused = true)]
    async fn failed_game_switch_keeps_the_running_timer() {
        let (mut console, mut rx) = console();
        console.handle_line("play math").unwrap();
        let (_, wrong) = option_indices(&console);
        console.handle_line(&format!("pick {}", wrong + 1)).unwrap();
        assert!(console.timer_armed());

        {
            let repo = console.state.repository();
            let mut settings = repo.get_game_settings().unwrap();
            settings.spelling.min_letters = 30;
            settings.spelling.max_letters = 40;
            repo.save_game_settings(&settings).unwrap();
        }
        let reply = console.handle_line("play spelling").unwrap();
        assert!(reply.starts_with("! "), "{}", reply);
        assert!(console.timer_armed());

        let game = console.state.game.as_ref().unwrap();
        assert_eq!(game.kind(), GameKind::Math);
        let seq = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        console.handle_timeout(seq);
        assert_eq!(console.state.game.as_ref().unwrap().phase(), FeedbackPhase::None);
    }

    #[test]
    fn errors_are_reported_inline() {
        let state = AppState::new(
            SqliteRepository::open_in_memory().unwrap(),
            Vocabulary::load().unwrap(),
            Arc::new(SilentAudio),
        );
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut console = Console::new(state, tx);
        assert!(console.handle_line("pick 1").unwrap().starts_with("! "));
        assert!(console.handle_line("quit").is_none());
    }
}
