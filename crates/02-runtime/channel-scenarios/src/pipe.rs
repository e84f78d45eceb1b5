//! Byte-to-typed forwarding threads.
//!
//! A pipe owns the consumer end of a byte channel and a producer handle on a typed
//! channel. It decodes records of one schema until the byte channel closes, wrapping
//! each into the typed channel's message type. Several pipes feeding clones of one
//! typed sender fan heterogeneous byte streams into a single inbox; the inbox closes
//! once every pipe has drained its input and exited.

use std::thread::{self, JoinHandle};

use channel::Sender;
use wire_codec::{ByteReceiver, Wire};

use crate::error::ScenarioResult;

/// Outcome of a pipe that ran to closure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipeReport {
    /// Records decoded and forwarded before the input closed. A record cut short by
    /// closure is dropped and not counted.
    pub forwarded: u64,
}

/// Forwards records from `input` to `output` on the calling thread until `input` closes.
pub fn run_pipe<M, U, F>(
    name: &str,
    input: &ByteReceiver,
    output: &Sender<U>,
    wrap: F,
) -> PipeReport
where
    M: Wire,
    F: Fn(M) -> U,
{
    let mut report = PipeReport::default();
    while let Ok(record) = M::decode(input) {
        output.send(wrap(record));
        report.forwarded += 1;
    }
    tracing::debug!(pipe = name, forwarded = report.forwarded, "pipe input closed");
    report
}

/// Runs [`run_pipe`] on a dedicated thread named `pipe-{name}`.
///
/// The thread owns `output`, so the typed channel loses this producer as soon as the
/// pipe finishes.
pub fn spawn_pipe<M, U, F>(
    name: &str,
    input: ByteReceiver,
    output: Sender<U>,
    wrap: F,
) -> ScenarioResult<JoinHandle<PipeReport>>
where
    M: Wire + 'static,
    U: Send + 'static,
    F: Fn(M) -> U + Send + 'static,
{
    let name = name.to_owned();
    let handle = thread::Builder::new()
        .name(format!("pipe-{name}"))
        .spawn(move || run_pipe(&name, &input, &output, wrap))?;
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{Inbound, RangeQuery, TextTick};
    use wire_codec::{byte_channel, SendWire};

    #[test]
    fn forwards_until_input_closes() {
        let (bytes_tx, bytes_rx) = byte_channel();
        let (inbox_tx, inbox_rx) = channel::channel();
        for lo in 0..3u64 {
            bytes_tx.send_wire(&RangeQuery { lo, hi: lo + 2 });
        }
        drop(bytes_tx);

        let report = run_pipe("range", &bytes_rx, &inbox_tx, Inbound::Range);
        drop(inbox_tx);

        assert_eq!(report.forwarded, 3);
        let los: Vec<u64> = inbox_rx
            .iter()
            .map(|msg| match msg {
                Inbound::Range(q) => q.lo,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(los, vec![0, 1, 2]);
    }

    #[test]
    fn partial_trailing_record_is_not_forwarded() {
        let (bytes_tx, bytes_rx) = byte_channel();
        let (inbox_tx, inbox_rx) = channel::channel();
        bytes_tx.send_wire(&TextTick {
            text: "hello".into(),
            num: 9,
        });
        bytes_tx.send_wire(&String::from("world"));
        drop(bytes_tx);

        let report = run_pipe("text", &bytes_rx, &inbox_tx, Inbound::Text);
        drop(inbox_tx);

        assert_eq!(report.forwarded, 1);
        assert_eq!(inbox_rx.len(), 1);
        assert!(bytes_rx.is_empty());
    }

    #[test]
    fn spawned_pipe_releases_inbox_when_done() {
        let (bytes_tx, bytes_rx) = byte_channel();
        let (inbox_tx, inbox_rx) = channel::channel::<TextTick>();
        let pipe = spawn_pipe("text", bytes_rx, inbox_tx, |tick: TextTick| tick).unwrap();
        assert_eq!(inbox_rx.live_senders(), 1);

        bytes_tx.send_wire(&TextTick {
            text: "goodbye".into(),
            num: 3,
        });
        drop(bytes_tx);

        let ticks: Vec<TextTick> = inbox_rx.iter().collect();
        assert_eq!(ticks.len(), 1);
        assert_eq!(pipe.join().unwrap(), PipeReport { forwarded: 1 });
        assert_eq!(inbox_rx.live_senders(), 0);
    }
}
