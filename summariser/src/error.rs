use std::path::PathBuf;

use openlane_run_model::RunError;

/// Failures while locating or rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Cannot locate the PDK without environment variable `{0}`")]
    MissingEnvironment(&'static str),
    #[error("No `design` section in {}", .0.display())]
    MissingDesign(PathBuf),
    #[error("{viewer} is not available, {hint}")]
    ViewerNotInstalled { viewer: String, hint: String },
    #[error("no completed runs found")]
    NoCompletedRuns,
    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),
    #[error(transparent)]
    Run(#[from] RunError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Serde JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
