//! Threaded producer/consumer scenarios over [`channel`] and [`wire_codec`].
//!
//! Each scenario spawns its producers, drains the resulting channel on the calling
//! thread until closure, and reports what arrived so the `verify_*` checks can
//! confirm delivery and per-producer ordering.

#![allow(missing_docs)]

mod checks;
mod config;
mod engine;
mod error;
mod messages;
mod pipe;
mod stats;

pub use checks::{verify_complete, verify_fifo, verify_forwarded, verify_report, CheckResult};
pub use config::{ScenarioConfig, ScenarioKind, ScenarioType};
pub use engine::{run_scenario, ScenarioReport, BURST_PAUSE};
pub use error::{ScenarioError, ScenarioResult};
pub use messages::{Inbound, RangeQuery, Stamp, TextTick};
pub use pipe::{run_pipe, spawn_pipe, PipeReport};
pub use stats::{ArcStatsSink, ScenarioStats, StatsSink};

/// Utility to update stats counters with wrapping arithmetic.
#[inline]
fn wrapping_add(base: u32, delta: u32) -> u32 {
    base.wrapping_add(delta)
}
