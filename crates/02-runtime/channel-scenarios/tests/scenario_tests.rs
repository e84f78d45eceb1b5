//! End-to-end scenario runs: real threads, real channels, full verification.

use channel_scenarios::{
    run_scenario, spawn_pipe, verify_fifo, verify_report, Inbound, RangeQuery, ScenarioConfig,
    ScenarioKind, TextTick,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wire_codec::{byte_channel, SendWire};

/// A single producer's values arrive complete and in order, then closure is observed.
#[test]
fn flood_delivers_in_order() {
    let report = run_scenario(&ScenarioConfig::flood(500)).expect("flood");
    assert_eq!(report.kind, ScenarioKind::Flood { items: 500 });
    assert_eq!(verify_report(&report), Ok(()));
    assert_eq!(report.sequence_of(0), (0..500).collect::<Vec<_>>());
}

/// Rapid groups separated by pauses: the consumer parks between bursts and still
/// sees every value exactly once.
#[test]
fn bursts_with_pauses_drain_completely() {
    let report = run_scenario(&ScenarioConfig::burst(6, 25)).expect("burst");
    assert_eq!(verify_report(&report), Ok(()));
    assert_eq!(report.received.len(), 150);
    assert_eq!(report.stats.produced, 150);
}

/// Several producers interleave arbitrarily but each producer's order survives.
#[test]
fn fan_in_preserves_per_producer_order() {
    let report = run_scenario(&ScenarioConfig::fan_in(8, 400)).expect("fan-in");
    assert_eq!(verify_report(&report), Ok(()));
    for producer in 0..8 {
        assert_eq!(report.sequence_of(producer).len(), 400);
    }
}

/// Two byte streams with different record schemas merge into one typed inbox.
#[test]
fn pipe_scenario_merges_two_schemas() {
    let report = run_scenario(&ScenarioConfig::pipe(120)).expect("pipe");
    assert_eq!(verify_report(&report), Ok(()));
    assert_eq!(report.stats.forwarded, 240);
}

/// Zero producers: the channel is closed as soon as the scenario drops its own sender.
#[test]
fn fan_in_without_producers_closes_immediately() {
    let report = run_scenario(&ScenarioConfig::fan_in(0, 10)).expect("fan-in");
    assert!(report.received.is_empty());
    assert!(report.stats.closed_observed);
    assert_eq!(verify_report(&report), Ok(()));
}

/// Hand-wired fan-in: four pipes, alternating schemas, one inbox that closes only
/// after every pipe's byte stream has closed.
#[test]
fn many_pipes_share_one_inbox() {
    let (inbox_tx, inbox_rx) = channel::channel::<Inbound>();
    let mut feeds = Vec::new();
    let mut pipes = Vec::new();
    for idx in 0..4 {
        let (tx, rx) = byte_channel();
        let name = format!("feed-{idx}");
        let pipe = if idx % 2 == 0 {
            spawn_pipe(&name, rx, inbox_tx.clone(), Inbound::Text).unwrap()
        } else {
            spawn_pipe(&name, rx, inbox_tx.clone(), Inbound::Range).unwrap()
        };
        feeds.push(tx);
        pipes.push(pipe);
    }
    drop(inbox_tx);

    let writers: Vec<_> = feeds
        .into_iter()
        .enumerate()
        .map(|(idx, tx)| {
            std::thread::spawn(move || {
                for seq in 0..50u64 {
                    if idx % 2 == 0 {
                        tx.send_wire(&TextTick {
                            text: format!("feed-{idx}"),
                            num: seq as i32,
                        });
                    } else {
                        tx.send_wire(&RangeQuery {
                            lo: seq,
                            hi: idx as u64,
                        });
                    }
                }
            })
        })
        .collect();

    let mut texts = [Vec::new(), Vec::new()];
    let mut ranges = [Vec::new(), Vec::new()];
    for msg in &inbox_rx {
        match msg {
            Inbound::Text(tick) => {
                let slot = if tick.text == "feed-0" { 0 } else { 1 };
                texts[slot].push(tick.num as u64);
            }
            Inbound::Range(query) => {
                let slot = if query.hi == 1 { 0 } else { 1 };
                ranges[slot].push(query.lo);
            }
        }
    }

    for writer in writers {
        writer.join().unwrap();
    }
    let forwarded: u64 = pipes.into_iter().map(|p| p.join().unwrap().forwarded).sum();
    assert_eq!(forwarded, 200);

    let expected: Vec<u64> = (0..50).collect();
    for seqs in texts.iter().chain(ranges.iter()) {
        assert_eq!(seqs, &expected);
    }
}

/// Seeded sweep over fan-in shapes.
#[test]
fn randomised_fan_in_shapes() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _ in 0..24 {
        let producers = rng.gen_range(1..6);
        let items = rng.gen_range(0..300);
        let report = run_scenario(&ScenarioConfig::fan_in(producers, items)).expect("fan-in");
        assert_eq!(
            verify_fifo(&report),
            Ok(()),
            "producers={producers} items={items}"
        );
        assert_eq!(report.received.len() as u32, producers * items);
    }
}

#[cfg(feature = "proptest")]
mod prop {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Any small fan-in or pipe shape passes every check.
        #[test]
        fn scenarios_verify_prop(producers in 1u32..5, items in 0u32..200, pipe in any::<bool>()) {
            let config = if pipe {
                ScenarioConfig::pipe(items)
            } else {
                ScenarioConfig::fan_in(producers, items)
            };
            let report = run_scenario(&config).expect("scenario");
            prop_assert_eq!(verify_report(&report), Ok(()));
        }
    }
}
