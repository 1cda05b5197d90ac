use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::NaiveDateTime;

use crate::timestamp::parse_run_timestamp;

/// One execution of the flow, identified by its directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    path: PathBuf,
    /// Timestamp parsed from the directory name
    ///
    /// `None` when the name matches no known layout. Such runs order before all others.
    timestamp: Option<NaiveDateTime>,
}

impl Run {
    /// Create a run for the given directory, parsing the timestamp from its base name.
    pub fn from_path<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        let path = path.into();
        let timestamp = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(parse_run_timestamp);
        Self { path, timestamp }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The base name of the run directory.
    pub fn name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| self.path.to_string_lossy())
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    /// Filesystem creation time of the run directory.
    ///
    /// Falls back to the modification time where the platform does not record creation.
    pub fn created(&self) -> std::io::Result<SystemTime> {
        let metadata = std::fs::metadata(&self.path)?;
        metadata.created().or_else(|_| metadata.modified())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_take_timestamp_from_base_name_only() {
        let run = Run::from_path("/designs/RUN_2020.01.01_00.00.00/RUN_2024.05.06_07.08.09");
        assert_eq!(run.name(), "RUN_2024.05.06_07.08.09");
        assert_eq!(
            run.timestamp(),
            chrono::NaiveDate::from_ymd_opt(2024, 5, 6)
                .unwrap()
                .and_hms_opt(7, 8, 9)
        );
    }

    #[test]
    fn test_should_keep_unparsed_run() {
        let run = Run::from_path("runs/rerun-with-new-pins");
        assert_eq!(run.name(), "rerun-with-new-pins");
        assert_eq!(run.timestamp(), None);
    }
}
