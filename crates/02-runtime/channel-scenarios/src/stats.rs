use parking_lot::Mutex;
use std::sync::Arc;

use crate::wrapping_add;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ScenarioStats {
    pub produced: u32,
    pub received: u32,
    pub forwarded: u32,
    pub closed_observed: bool,
}

impl ScenarioStats {
    pub fn record_produced(&mut self) {
        self.produced = wrapping_add(self.produced, 1);
    }

    pub fn record_received(&mut self) {
        self.received = wrapping_add(self.received, 1);
    }

    /// Adds a pipe's forwarded total, saturating counts that do not fit the counter.
    pub fn record_forwarded(&mut self, count: u64) {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        self.forwarded = wrapping_add(self.forwarded, count);
    }
}

pub trait StatsSink: Clone + Send + 'static {
    fn with_stats<R>(&self, f: impl FnOnce(&mut ScenarioStats) -> R) -> R;
}

#[derive(Clone, Default)]
pub struct ArcStatsSink(pub Arc<Mutex<ScenarioStats>>);

impl ArcStatsSink {
    pub fn snapshot(&self) -> ScenarioStats {
        *self.0.lock()
    }
}

impl StatsSink for ArcStatsSink {
    fn with_stats<R>(&self, f: impl FnOnce(&mut ScenarioStats) -> R) -> R {
        let mut guard = self.0.lock();
        f(&mut *guard)
    }
}
