use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::ReportError;

/// A file produced by one step of the flow, found by a glob relative to the run directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Metrics,
    DrcReport,
    Hierarchy,
    SynthesisStats,
    AntennaLog,
    Floorplan,
    PowerDistribution,
    GlobalPlacement,
    DetailedPlacement,
    FinalGds,
}

impl Artifact {
    pub fn pattern(&self) -> &'static str {
        match self {
            Artifact::Metrics => "final/metrics.csv",
            Artifact::DrcReport => "*-magic-drc/reports/drc_violations.magic.rpt",
            Artifact::Hierarchy => "*-yosys-synthesis/hierarchy.dot",
            Artifact::SynthesisStats => "*-yosys-synthesis/reports/stat.json",
            Artifact::AntennaLog => "*-openroad-checkantennas/openroad-checkantennas.log",
            Artifact::Floorplan => "*-openroad-floorplan/*.def",
            Artifact::PowerDistribution => "*-openroad-generatepdn/*.def",
            Artifact::GlobalPlacement => "*-openroad-globalplacement/*.def",
            Artifact::DetailedPlacement => "*-openroad-detailedplacement/*.def",
            Artifact::FinalGds => "final/gds/*.gds",
        }
    }

    /// Find this artifact in `run`. See [resolve].
    pub fn resolve<W>(&self, run: &Path, warnings: W) -> Result<PathBuf, ReportError>
    where
        W: Write,
    {
        resolve(run, self.pattern(), warnings)
    }

    /// Find this artifact in `run` if it was produced. See [resolve_optional].
    pub fn resolve_optional<W>(
        &self,
        run: &Path,
        warnings: W,
    ) -> Result<Option<PathBuf>, ReportError>
    where
        W: Write,
    {
        resolve_optional(run, self.pattern(), warnings)
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Metrics => write!(f, "metrics"),
            Artifact::DrcReport => write!(f, "DRC report"),
            Artifact::Hierarchy => write!(f, "synthesis hierarchy"),
            Artifact::SynthesisStats => write!(f, "synthesis statistics"),
            Artifact::AntennaLog => write!(f, "antenna report"),
            Artifact::Floorplan => write!(f, "floorplan"),
            Artifact::PowerDistribution => write!(f, "power distribution network"),
            Artifact::GlobalPlacement => write!(f, "global placement"),
            Artifact::DetailedPlacement => write!(f, "detailed placement"),
            Artifact::FinalGds => write!(f, "final GDS"),
        }
    }
}

/// Resolve `pattern` below `root` to exactly one file.
///
/// No match is an error. With several matches the first in sorted order is used and a warning
/// line is written to `warnings`.
pub fn resolve<W>(root: &Path, pattern: &str, warnings: W) -> Result<PathBuf, ReportError>
where
    W: Write,
{
    resolve_optional(root, pattern, warnings)?
        .ok_or_else(|| ReportError::NotFound(root.join(pattern)))
}

/// Like [resolve], but no match is `None`.
pub fn resolve_optional<W>(
    root: &Path,
    pattern: &str,
    mut warnings: W,
) -> Result<Option<PathBuf>, ReportError>
where
    W: Write,
{
    let matches = glob_sorted(root, pattern)?;
    if matches.len() > 1 {
        writeln!(
            warnings,
            "warning: glob pattern {} found {} files, using first one: {}",
            root.join(pattern).display(),
            matches.len(),
            matches[0].display()
        )?;
    }

    let found = matches.into_iter().next();
    if let Some(path) = &found {
        debug!("Resolved {pattern} to {}", path.display());
    }

    Ok(found)
}

fn glob_sorted(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, ReportError> {
    // The root is literal, only the relative part may hold wildcards
    let root = Pattern::escape(&root.to_string_lossy());
    let full = Path::new(&root).join(pattern);

    let mut matches = glob::glob(&full.to_string_lossy())?
        .map(|entry| entry.map_err(|e| ReportError::Io(e.into())))
        .collect::<Result<Vec<_>, _>>()?;
    matches.sort();

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn touch(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn test_should_resolve_single_match() {
        let run = tempfile::tempdir().unwrap();
        let expected = touch(run.path(), "12-openroad-floorplan/top.def");
        touch(run.path(), "12-openroad-floorplan/top.odb");

        assert_eq!(
            Artifact::Floorplan
                .resolve(run.path(), std::io::sink())
                .unwrap(),
            expected
        );
    }

    #[test]
    fn test_should_fail_without_match() {
        let run = tempfile::tempdir().unwrap();
        let result = Artifact::Metrics.resolve(run.path(), std::io::sink());
        match result {
            Err(ReportError::NotFound(path)) => {
                assert_eq!(path, run.path().join("final/metrics.csv"))
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_should_return_none_for_missing_optional() {
        let run = tempfile::tempdir().unwrap();
        assert_eq!(
            Artifact::DrcReport
                .resolve_optional(run.path(), std::io::sink())
                .unwrap(),
            None
        );
    }

    #[test]
    fn test_should_pick_first_of_ambiguous_matches_repeatably() {
        let run = tempfile::tempdir().unwrap();
        let first = touch(run.path(), "40-openroad-detailedplacement/a.def");
        touch(run.path(), "40-openroad-detailedplacement/b.def");
        touch(run.path(), "52-openroad-detailedplacement/a.def");

        let resolved = Artifact::DetailedPlacement
            .resolve(run.path(), std::io::sink())
            .unwrap();
        assert_eq!(resolved, first);
        assert_eq!(
            Artifact::DetailedPlacement
                .resolve(run.path(), std::io::sink())
                .unwrap(),
            resolved
        );
    }

    #[test]
    fn test_should_warn_about_ambiguous_matches() {
        let run = tempfile::tempdir().unwrap();
        let first = touch(run.path(), "1-openroad-floorplan/x.def");
        touch(run.path(), "1-openroad-floorplan/y.def");

        let mut warnings = Vec::new();
        let resolved = Artifact::Floorplan.resolve(run.path(), &mut warnings).unwrap();
        assert_eq!(resolved, first);
        assert_eq!(
            String::from_utf8(warnings).unwrap(),
            format!(
                "warning: glob pattern {} found 2 files, using first one: {}\n",
                run.path().join("*-openroad-floorplan/*.def").display(),
                first.display()
            )
        );
    }

    #[test]
    fn test_should_not_warn_about_single_match() {
        let run = tempfile::tempdir().unwrap();
        touch(run.path(), "final/metrics.csv");

        let mut warnings = Vec::new();
        Artifact::Metrics.resolve(run.path(), &mut warnings).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_should_treat_root_literally() {
        let temp = tempfile::tempdir().unwrap();
        let run = temp.path().join("RUN_[1]");
        let expected = touch(&run, "final/gds/top.gds");

        assert_eq!(Artifact::FinalGds.resolve(&run, std::io::sink()).unwrap(), expected);
    }
}
