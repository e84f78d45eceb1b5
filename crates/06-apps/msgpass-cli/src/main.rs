//! Command-line driver for the threaded message-passing scenarios.

use anyhow::{bail, Context, Result};
use channel_scenarios::{run_scenario, verify_report, ScenarioConfig};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Text rendering for scenario outcomes.
mod render {
    use channel_scenarios::{CheckResult, ScenarioReport};
    use std::fmt::Write;

    /// Format the counters and per-producer totals of one run.
    pub fn summary(report: &ScenarioReport, check: &CheckResult) -> String {
        let mut out = String::new();
        writeln!(out, "scenario: {:?}", report.kind).expect("write kind");
        writeln!(
            out,
            "produced={} received={} forwarded={} closed={}",
            report.stats.produced,
            report.stats.received,
            report.stats.forwarded,
            if report.stats.closed_observed { "yes" } else { "no" }
        )
        .expect("write stats");
        for producer in 0..report.kind.producers() {
            let seqs = report.sequence_of(producer);
            writeln!(out, "producer {producer}: {} value(s)", seqs.len()).expect("write producer");
        }
        match check {
            Ok(()) => out.push_str("check: ok\n"),
            Err(reason) => writeln!(out, "check: FAILED ({reason})").expect("write check"),
        }
        out
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Run message-passing scenarios over blocking channels",
    long_about = None
)]
struct Args {
    /// Scenario to run.
    #[arg(long, value_enum, default_value_t = ScenarioArg::FanIn)]
    scenario: ScenarioArg,

    /// Values per producer (records per feed for `pipe`).
    #[arg(long, default_value_t = 1000)]
    items: u32,

    /// Producer threads for `fan-in`.
    #[arg(long, default_value_t = 4)]
    producers: u32,

    /// Number of bursts for `burst`.
    #[arg(long, default_value_t = 5)]
    bursts: u32,

    /// Values per burst for `burst`.
    #[arg(long, default_value_t = 25)]
    burst_size: u32,

    /// How many times to run the scenario.
    #[arg(long, default_value_t = 1)]
    repeat: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScenarioArg {
    /// One producer, back-to-back sends.
    Flood,
    /// One producer, groups of sends separated by short pauses.
    Burst,
    /// Many producers sharing one channel.
    FanIn,
    /// Two encoded byte streams decoded into one typed inbox.
    Pipe,
}

impl Args {
    fn config(&self) -> ScenarioConfig {
        match self.scenario {
            ScenarioArg::Flood => ScenarioConfig::flood(self.items),
            ScenarioArg::Burst => ScenarioConfig::burst(self.bursts, self.burst_size),
            ScenarioArg::FanIn => ScenarioConfig::fan_in(self.producers, self.items),
            ScenarioArg::Pipe => ScenarioConfig::pipe(self.items),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = args.config();
    info!(?config, repeat = args.repeat, "starting scenario");

    for run in 0..args.repeat {
        let report = run_scenario(&config).with_context(|| format!("run {run} failed"))?;
        let check = verify_report(&report);
        print!("{}", render::summary(&report, &check));
        if let Err(reason) = check {
            bail!("run {run} failed verification: {reason}");
        }
    }

    info!(runs = args.repeat, "all runs verified");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(env_filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use channel_scenarios::{ScenarioKind, ScenarioReport, ScenarioStats, Stamp};
    use insta::assert_snapshot;

    fn sample_report() -> ScenarioReport {
        ScenarioReport {
            kind: ScenarioKind::FanIn {
                producers: 2,
                items_per_producer: 2,
            },
            received: vec![
                Stamp::new(0, 0),
                Stamp::new(1, 0),
                Stamp::new(0, 1),
                Stamp::new(1, 1),
            ],
            stats: ScenarioStats {
                produced: 4,
                received: 4,
                forwarded: 0,
                closed_observed: true,
            },
        }
    }

    #[test]
    fn summary_render_matches_expectation() {
        assert_snapshot!(render::summary(&sample_report(), &Ok(())), @r###"
        scenario: FanIn { producers: 2, items_per_producer: 2 }
        produced=4 received=4 forwarded=0 closed=yes
        producer 0: 2 value(s)
        producer 1: 2 value(s)
        check: ok
        "###);
    }

    #[test]
    fn failed_check_is_rendered() {
        let rendered = render::summary(&sample_report(), &Err("lost one".into()));
        assert!(rendered.ends_with("check: FAILED (lost one)\n"));
    }

    #[test]
    fn args_map_to_configs() {
        let args = Args::parse_from(["msgpass", "--scenario", "burst", "--bursts", "3"]);
        assert_eq!(args.config(), ScenarioConfig::burst(3, 25));

        let args = Args::parse_from(["msgpass", "--scenario", "fan-in", "--producers", "2"]);
        assert_eq!(args.config(), ScenarioConfig::fan_in(2, 1000));

        let args = Args::parse_from(["msgpass", "--scenario", "pipe", "--items", "7"]);
        assert_eq!(args.config(), ScenarioConfig::pipe(7));
    }
}
