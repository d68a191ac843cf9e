//! Collaborator contracts: speech/audio output and the reward counter.

use crate::error::StoreError;
use crate::types::{Locale, Signal};
use std::sync::{Arc, Mutex};

/// Speech and tone output. Calls are fire-and-forget; implementations swallow
/// their own failures.
pub trait AudioService: Send + Sync {
    fn speak(&self, text: &str, locale: Locale);
    fn play_signal(&self, signal: Signal);
}

/// Persistent star counter.
pub trait RewardStore {
    fn get_count(&self) -> Result<u64, StoreError>;
    fn set_count(&mut self, count: u64) -> Result<(), StoreError>;
}

/// Reward store shared by every session in the process.
pub type SharedRewards = Arc<Mutex<dyn RewardStore + Send>>;

/// Add one star and return the new total.
pub fn award_star(rewards: &SharedRewards) -> Result<u64, StoreError> {
    let mut store = match rewards.lock() {
        Ok(store) => store,
        Err(poisoned) => poisoned.into_inner(),
    };
    let total = store.get_count()? + 1;
    store.set_count(total)?;
    Ok(total)
}

/// Audio output that does nothing, for muted play and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioService for SilentAudio {
    fn speak(&self, _text: &str, _locale: Locale) {}
    fn play_signal(&self, _signal: Signal) {}
}

/// Counter kept in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryRewardStore {
    count: u64,
}

impl MemoryRewardStore {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    pub fn shared(count: u64) -> Arc<Mutex<MemoryRewardStore>> {
        Arc::new(Mutex::new(Self::new(count)))
    }
}

impl RewardStore for MemoryRewardStore {
    fn get_count(&self) -> Result<u64, StoreError> {
        Ok(self.count)
    }

    fn set_count(&mut self, count: u64) -> Result<(), StoreError> {
        self.count = count;
        Ok(())
    }
}
