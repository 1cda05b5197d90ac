use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::error::RunError;
use crate::run::Run;

/// Runs directory used when none is given, relative to the working directory.
pub const DEFAULT_RUNS_DIR: &str = "runs";

/// Find the runs directory.
///
/// The explicit path is checked first, then `default`. The first one that is a directory wins.
pub fn locate_runs_dir(explicit: Option<&Path>, default: &Path) -> Result<PathBuf, RunError> {
    let mut checked = Vec::with_capacity(2);

    if let Some(explicit) = explicit {
        if explicit.is_dir() {
            return Ok(explicit.to_path_buf());
        }
        log::debug!(
            "Runs directory {} does not exist, trying {}",
            explicit.display(),
            default.display()
        );
        checked.push(explicit.to_path_buf());
    }

    if default.is_dir() {
        return Ok(default.to_path_buf());
    }
    checked.push(default.to_path_buf());

    Err(RunError::NotFound { checked })
}

/// List the runs directly under `root`, oldest first by name timestamp.
///
/// Runs whose names carry no timestamp come first. Runs with equal keys keep path order.
pub fn discover_runs(root: &Path) -> Result<Vec<Run>, RunError> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    if dirs.is_empty() {
        return Err(RunError::Empty(root.to_path_buf()));
    }

    let runs = dirs
        .into_iter()
        .sorted()
        .map(Run::from_path)
        .sorted_by_key(|run| run.timestamp())
        .collect::<Vec<_>>();

    for (index, run) in runs.iter().enumerate() {
        log::debug!("Found run {index}: {}", run.path().display());
    }

    Ok(runs)
}
