//! Discovery and selection of physical-design flow runs.
//!
//! A flow writes one directory per run under a common runs directory. The directory names carry
//! the time the run started, which gives the runs an order that does not depend on the
//! filesystem.

mod discovery;
mod error;
mod run;
mod select;
mod timestamp;

pub use discovery::{discover_runs, locate_runs_dir, DEFAULT_RUNS_DIR};
pub use error::RunError;
pub use run::Run;
pub use select::{prompt_for_run, select_index, select_latest, RunSelection};
pub use timestamp::{parse_run_timestamp, IMPLICIT_YEAR};
