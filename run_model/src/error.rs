use std::path::PathBuf;

/// Failures while locating, enumerating or choosing a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("runs directory not found, checked: {}", display_paths(.checked))]
    NotFound { checked: Vec<PathBuf> },
    #[error("no runs found in {}", .0.display())]
    Empty(PathBuf),
    #[error("no runs to choose from")]
    NoCandidates,
    #[error("run index {index} is out of range, {len} runs available")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid run selection: {0:?}")]
    InvalidSelection(String),
    #[error("An error occurred while reading runs: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
