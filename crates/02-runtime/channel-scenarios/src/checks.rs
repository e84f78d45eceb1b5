use crate::engine::ScenarioReport;

pub type CheckResult = Result<(), String>;

/// Every value produced was received exactly once and the consumer saw closure.
pub fn verify_complete(report: &ScenarioReport) -> CheckResult {
    let expected = report.kind.expected_total();
    if report.received.len() as u64 != expected {
        return Err(format!(
            "received {} values (expected {})",
            report.received.len(),
            expected
        ));
    }
    if u64::from(report.stats.produced) != expected {
        return Err(format!(
            "stats produced {} values (expected {})",
            report.stats.produced, expected
        ));
    }
    if report.stats.received as usize != report.received.len() {
        return Err(format!(
            "stats received {} values but {} were collected",
            report.stats.received,
            report.received.len()
        ));
    }
    if !report.stats.closed_observed {
        return Err("consumer never observed channel closure".into());
    }
    Ok(())
}

/// Each producer's values arrived in the order it sent them, with no gaps.
pub fn verify_fifo(report: &ScenarioReport) -> CheckResult {
    let per_producer = report.kind.items_per_producer();
    for producer in 0..report.kind.producers() {
        let seqs = report.sequence_of(producer);
        if seqs.len() as u32 != per_producer {
            return Err(format!(
                "producer {} delivered {} values (expected {})",
                producer,
                seqs.len(),
                per_producer
            ));
        }
        if let Some((idx, seq)) = seqs
            .iter()
            .enumerate()
            .find(|(idx, seq)| **seq != *idx as u32)
        {
            return Err(format!(
                "producer {} value {} arrived at position {}",
                producer, seq, idx
            ));
        }
    }
    if let Some(stray) = report
        .received
        .iter()
        .find(|stamp| stamp.producer >= report.kind.producers())
    {
        return Err(format!("value from unknown producer {}", stray.producer));
    }
    Ok(())
}

/// Pipes forwarded every record their producers encoded.
pub fn verify_forwarded(report: &ScenarioReport) -> CheckResult {
    let expected = report.kind.expected_total();
    if u64::from(report.stats.forwarded) != expected {
        return Err(format!(
            "pipes forwarded {} records (expected {})",
            report.stats.forwarded, expected
        ));
    }
    Ok(())
}

/// Runs every check that applies to the report's scenario kind.
pub fn verify_report(report: &ScenarioReport) -> CheckResult {
    let result = verify_complete(report)
        .and_then(|()| verify_fifo(report))
        .and_then(|()| match report.kind {
            crate::ScenarioKind::Pipe { .. } => verify_forwarded(report),
            _ => Ok(()),
        });
    if let Err(reason) = &result {
        tracing::warn!(kind = ?report.kind, %reason, "scenario check failed");
    }
    result
}
