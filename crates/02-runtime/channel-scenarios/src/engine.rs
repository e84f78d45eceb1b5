use std::ops::Range;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use channel::{ChannelClosed, Receiver, Sender};
use wire_codec::{byte_channel, SendWire};

use crate::config::{ScenarioConfig, ScenarioKind};
use crate::error::{ScenarioError, ScenarioResult};
use crate::messages::{Inbound, RangeQuery, Stamp, TextTick, RANGE_PRODUCER, TEXT_PRODUCER};
use crate::pipe::spawn_pipe;
use crate::stats::{ArcStatsSink, ScenarioStats, StatsSink};

/// Pause between bursts so the consumer drains and parks again.
pub const BURST_PAUSE: Duration = Duration::from_millis(1);

const TEXT_LABELS: [&str; 3] = ["hello", "world", "goodbye"];

/// Everything a consumer observed while draining one scenario.
#[derive(Clone, Debug)]
pub struct ScenarioReport {
    pub kind: ScenarioKind,
    /// Values in the order the consumer received them.
    pub received: Vec<Stamp>,
    pub stats: ScenarioStats,
}

impl ScenarioReport {
    /// Sequence numbers received from `producer`, in arrival order.
    pub fn sequence_of(&self, producer: u32) -> Vec<u32> {
        self.received
            .iter()
            .filter(|stamp| stamp.producer == producer)
            .map(|stamp| stamp.seq)
            .collect()
    }
}

/// Runs the scenario on fresh threads and drains it on the calling thread until closure.
pub fn run_scenario(config: &ScenarioConfig) -> ScenarioResult<ScenarioReport> {
    let kind = config
        .scenario_kind()
        .ok_or(ScenarioError::UnknownScenario(config.scenario))?;
    let sink = ArcStatsSink::default();

    let received = match kind {
        ScenarioKind::Flood { items } => {
            run_direct(1, &sink, move |id, tx, sink| produce_run(id, 0..items, tx, sink))?
        }
        ScenarioKind::Burst { bursts, burst_size } => run_direct(1, &sink, move |id, tx, sink| {
            for burst in 0..bursts {
                if burst > 0 {
                    thread::sleep(BURST_PAUSE);
                }
                let start = burst.saturating_mul(burst_size);
                produce_run(id, start..start.saturating_add(burst_size), tx, sink);
            }
        })?,
        ScenarioKind::FanIn {
            producers,
            items_per_producer,
        } => run_direct(producers, &sink, move |id, tx, sink| {
            produce_run(id, 0..items_per_producer, tx, sink)
        })?,
        ScenarioKind::Pipe { records } => run_pipes(records, &sink)?,
    };

    let stats = sink.snapshot();
    tracing::debug!(
        ?kind,
        received = received.len(),
        produced = stats.produced,
        "scenario finished"
    );
    Ok(ScenarioReport {
        kind,
        received,
        stats,
    })
}

fn produce_run<S: StatsSink>(producer: u32, seqs: Range<u32>, tx: &Sender<Stamp>, sink: &S) {
    for seq in seqs {
        tx.send(Stamp::new(producer, seq));
        sink.with_stats(ScenarioStats::record_produced);
    }
}

/// Producers send stamps straight into one shared typed channel.
fn run_direct<S, F>(producers: u32, sink: &S, body: F) -> ScenarioResult<Vec<Stamp>>
where
    S: StatsSink,
    F: Fn(u32, &Sender<Stamp>, &S) + Send + Sync + 'static,
{
    let (tx, rx) = channel::channel();
    let body = Arc::new(body);
    let mut handles = Vec::with_capacity(producers as usize);
    for id in 0..producers {
        let tx = tx.clone();
        let sink = sink.clone();
        let body = Arc::clone(&body);
        let handle = thread::Builder::new()
            .name(format!("producer-{id}"))
            .spawn(move || body(id, &tx, &sink))?;
        handles.push(handle);
    }
    drop(tx);

    let received = drain(&rx, sink, |stamp| stamp);
    join_all(handles)?;
    Ok(received)
}

/// Producers encode records onto private byte channels; one pipe per byte channel
/// decodes and forwards into the shared inbox.
fn run_pipes<S: StatsSink>(records: u32, sink: &S) -> ScenarioResult<Vec<Stamp>> {
    let (inbox_tx, inbox_rx) = channel::channel::<Inbound>();
    let (text_tx, text_rx) = byte_channel();
    let (range_tx, range_rx) = byte_channel();

    let pipes = vec![
        spawn_pipe("text", text_rx, inbox_tx.clone(), Inbound::Text)?,
        spawn_pipe("range", range_rx, inbox_tx, Inbound::Range)?,
    ];

    let text_sink = sink.clone();
    let range_sink = sink.clone();
    let producers = vec![
        thread::Builder::new()
            .name(format!("producer-{TEXT_PRODUCER}"))
            .spawn(move || {
                for seq in 0..records {
                    text_tx.send_wire(&TextTick {
                        text: TEXT_LABELS[seq as usize % TEXT_LABELS.len()].into(),
                        num: seq as i32,
                    });
                    text_sink.with_stats(ScenarioStats::record_produced);
                }
            })?,
        thread::Builder::new()
            .name(format!("producer-{RANGE_PRODUCER}"))
            .spawn(move || {
                for seq in 0..records {
                    let lo = u64::from(seq);
                    range_tx.send_wire(&RangeQuery { lo, hi: lo + 1 });
                    range_sink.with_stats(ScenarioStats::record_produced);
                }
            })?,
    ];

    let received = drain(&inbox_rx, sink, |msg| Stamp::from(&msg));
    join_all(producers)?;
    for report in join_all(pipes)? {
        sink.with_stats(|stats| stats.record_forwarded(report.forwarded));
    }
    Ok(received)
}

fn drain<T, S>(rx: &Receiver<T>, sink: &S, stamp: impl Fn(T) -> Stamp) -> Vec<Stamp>
where
    S: StatsSink,
{
    let mut received = Vec::new();
    loop {
        match rx.recv() {
            Ok(item) => {
                received.push(stamp(item));
                sink.with_stats(ScenarioStats::record_received);
            }
            Err(ChannelClosed) => {
                sink.with_stats(|stats| stats.closed_observed = true);
                return received;
            }
        }
    }
}

fn join_all<R>(handles: Vec<JoinHandle<R>>) -> ScenarioResult<Vec<R>> {
    handles
        .into_iter()
        .map(|handle| {
            let name = handle.thread().name().unwrap_or("unnamed").to_owned();
            handle
                .join()
                .map_err(|_| ScenarioError::WorkerPanicked(name))
        })
        .collect()
}
