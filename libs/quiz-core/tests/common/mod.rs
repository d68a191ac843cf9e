//! Shared fixtures for the integration tests.
//!
//! - `RecordingAudio` captures everything a session asks the audio layer to do
//! - table builders for small, predictable vocabularies
//! - session constructors wired to an in-memory reward store

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use quiz_core::{
    AudioService, Collaborators, FeedbackPolicy, IncorrectReset, Locale, MemoryRewardStore,
    RandomSource, RewardStore, SessionEvent, Signal, SpellingGenerator, SpellingSession,
    SpellingSettings, VocabularyEntry, VocabularyTable,
};

/// One call made on the audio collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioCall {
    Speak(String, Locale),
    Signal(Signal),
}

/// Audio collaborator that only records.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    calls: Mutex<Vec<AudioCall>>,
}

impl RecordingAudio {
    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn signals(&self) -> Vec<Signal> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                AudioCall::Signal(s) => Some(s),
                AudioCall::Speak(..) => None,
            })
            .collect()
    }
}

impl AudioService for RecordingAudio {
    fn speak(&self, text: &str, locale: Locale) {
        self.calls
            .lock()
            .unwrap()
            .push(AudioCall::Speak(text.to_string(), locale));
    }

    fn play_signal(&self, signal: Signal) {
        self.calls.lock().unwrap().push(AudioCall::Signal(signal));
    }
}

/// Collaborators plus handles to inspect them afterwards.
pub struct Harness {
    pub audio: Arc<RecordingAudio>,
    pub rewards: Arc<Mutex<MemoryRewardStore>>,
}

impl Harness {
    pub fn new(stars: u64) -> Self {
        Self {
            audio: Arc::new(RecordingAudio::default()),
            rewards: MemoryRewardStore::shared(stars),
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators::new(self.audio.clone(), self.rewards.clone())
    }

    pub fn stars(&self) -> u64 {
        self.rewards.lock().unwrap().get_count().unwrap()
    }
}

/// A Hebrew table whose only spellable word is the four-letter "חָתוּל".
pub fn four_letter_table() -> VocabularyTable {
    VocabularyTable::new(
        "cats",
        vec![
            ("ח".to_string(), vec![VocabularyEntry::new("חָתוּל", "🐈")]),
            ("ד".to_string(), vec![VocabularyEntry::new("דָּג", "🐟")]),
            ("ס".to_string(), vec![VocabularyEntry::new("סוּס", "🐎")]),
        ],
    )
    .unwrap()
}

pub fn four_letter_session(
    harness: &Harness,
    reset: IncorrectReset,
    rng: Box<dyn RandomSource + Send>,
) -> SpellingSession {
    let settings = SpellingSettings {
        min_letters: 4,
        max_letters: 4,
        incorrect_reset: reset,
    };
    let generator = SpellingGenerator::new(&four_letter_table(), &settings).unwrap();
    SpellingSession::start(
        generator,
        rng,
        harness.collaborators(),
        FeedbackPolicy::default(),
        reset,
    )
    .unwrap()
}

/// How many `FeedbackShown` events carry a given phase.
pub fn feedback_count(events: &[SessionEvent], phase: quiz_core::FeedbackPhase) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SessionEvent::FeedbackShown { phase: p, .. } if *p == phase))
        .count()
}
