use std::io::Write;

use openlane_run_model::Run;

use crate::error::ReportError;
use crate::locate::Artifact;
use crate::report::{flow_status, violation_total, MetricsReader, FLOW_COMPLETED};

/// Total violations for each completed run, in the order given.
///
/// A run is completed when it produced final metrics and, if those metrics record a flow status,
/// the status is `Flow_completed`. Flow versions without a status metric count every run with
/// final metrics as completed.
pub fn rank_by_violations<W>(
    runs: &[Run],
    mut warnings: W,
) -> Result<Vec<(&Run, u64)>, ReportError>
where
    W: Write,
{
    let mut ranked = Vec::new();
    for run in runs {
        let Some(metrics) = Artifact::Metrics.resolve_optional(run.path(), &mut warnings)? else {
            debug!("Skipping run {}, no final metrics", run.name());
            continue;
        };
        let rows = MetricsReader::read_from_file(&metrics)?;
        match flow_status(&rows) {
            Some(status) if status != FLOW_COMPLETED => {
                debug!("Skipping run {}, flow status {status}", run.name());
            }
            _ => ranked.push((run, violation_total(&rows))),
        }
    }
    Ok(ranked)
}

/// The completed run with the fewest violations.
///
/// On a tie the earlier run in the given order wins.
pub fn select_fewest_violations<'a, W>(
    runs: &'a [Run],
    mut output: W,
) -> Result<&'a Run, ReportError>
where
    W: Write,
{
    let ranked = rank_by_violations(runs, &mut output)?;
    for (run, violations) in &ranked {
        writeln!(output, "found run {} with {violations} violations", run.name())?;
    }

    let (run, violations) = ranked
        .into_iter()
        .min_by_key(|(_, violations)| *violations)
        .ok_or(ReportError::NoCompletedRuns)?;
    info!("Selected run {} with {violations} violations", run.name());
    writeln!(output, "{}", run.path().display())?;

    Ok(run)
}
