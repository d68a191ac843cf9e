//! Terminal stand-in for speech and sound effects.

use quiz_core::{AudioService, Locale, Signal, SilentAudio};
use std::io::Write;
use std::sync::Arc;

/// Prints what would be spoken or played.
#[derive(Debug, Default)]
pub struct ConsoleAudio;

impl AudioService for ConsoleAudio {
    fn speak(&self, text: &str, locale: Locale) {
        tracing::debug!(locale = locale.tag(), text, "speak");
        let mut out = std::io::stdout().lock();
        // output failures never affect play
        let _ = writeln!(out, "🔊 [{}] {}", locale.tag(), text);
    }

    fn play_signal(&self, signal: Signal) {
        tracing::debug!(?signal, "signal");
        let cue = match signal {
            Signal::Success => "🎵 ding!",
            Signal::Failure => "🎵 bzzt",
        };
        let _ = writeln!(std::io::stdout().lock(), "{}", cue);
    }
}

/// Audio output for this process; `QUIZ_MUTE=1` silences it.
pub fn from_env() -> Arc<dyn AudioService> {
    match std::env::var("QUIZ_MUTE").as_deref() {
        Ok("1") | Ok("true") => {
            tracing::info!("audio muted");
            Arc::new(SilentAudio)
        }
        _ => Arc::new(ConsoleAudio),
    }
}
