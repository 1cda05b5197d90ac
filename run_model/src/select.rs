use std::io::{BufRead, Write};

use crate::error::RunError;
use crate::run::Run;

/// How a run is chosen from the discovered candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunSelection {
    /// The run whose directory was created last
    #[default]
    Latest,
    /// The run at this position in name timestamp order
    Index(usize),
    /// Ask on the terminal
    Interactive,
}

impl RunSelection {
    /// Map the optional-value `--run [N]` flag onto a selection.
    ///
    /// Absent means [RunSelection::Latest], present without a value means
    /// [RunSelection::Interactive].
    pub fn from_flag(flag: Option<Option<usize>>) -> Self {
        match flag {
            None => RunSelection::Latest,
            Some(None) => RunSelection::Interactive,
            Some(Some(index)) => RunSelection::Index(index),
        }
    }

    /// Choose a run from `runs`, which must be in name timestamp order.
    ///
    /// `input` is only read for [RunSelection::Interactive]. The choice is reported on `output`.
    pub fn select<'a, R, W>(
        self,
        runs: &'a [Run],
        input: R,
        mut output: W,
    ) -> Result<&'a Run, RunError>
    where
        R: BufRead,
        W: Write,
    {
        let run = match self {
            RunSelection::Latest => {
                writeln!(output, "using latest run:")?;
                select_latest(runs)?
            }
            RunSelection::Index(index) => {
                writeln!(output, "using run {index}:")?;
                select_index(runs, index)?
            }
            RunSelection::Interactive => prompt_for_run(runs, input, &mut output)?,
        };
        writeln!(output, "{}", run.path().display())?;

        Ok(run)
    }
}

/// The run with the most recent directory creation time.
///
/// This can differ from the last run in name order, for example when an old run was copied.
pub fn select_latest(runs: &[Run]) -> Result<&Run, RunError> {
    let mut latest: Option<(std::time::SystemTime, &Run)> = None;
    for run in runs {
        let created = run.created()?;
        match latest {
            Some((newest, _)) if created < newest => {}
            _ => latest = Some((created, run)),
        }
    }

    latest
        .map(|(_, run)| run)
        .ok_or(RunError::NoCandidates)
}

pub fn select_index(runs: &[Run], index: usize) -> Result<&Run, RunError> {
    runs.get(index).ok_or(RunError::IndexOutOfRange {
        index,
        len: runs.len(),
    })
}

/// List the runs on `output` and read the chosen index from `input`.
///
/// An empty answer picks the last run listed.
pub fn prompt_for_run<'a, R, W>(
    runs: &'a [Run],
    mut input: R,
    mut output: W,
) -> Result<&'a Run, RunError>
where
    R: BufRead,
    W: Write,
{
    let Some(default_index) = runs.len().checked_sub(1) else {
        return Err(RunError::NoCandidates);
    };

    for (index, run) in runs.iter().enumerate() {
        write!(output, "\n{index:>2}: {}", run.name())?;
    }
    writeln!(output, " <default>\n")?;
    write!(output, "which run? <enter for default>: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();

    let index = if answer.is_empty() {
        default_index
    } else {
        answer
            .parse::<usize>()
            .map_err(|_| RunError::InvalidSelection(answer.to_string()))?
    };

    select_index(runs, index)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn runs(names: &[&str]) -> Vec<Run> {
        names
            .iter()
            .map(|name| Run::from_path(PathBuf::from("runs").join(name)))
            .collect()
    }

    #[test]
    fn test_should_map_run_flag() {
        assert_eq!(RunSelection::from_flag(None), RunSelection::Latest);
        assert_eq!(RunSelection::from_flag(Some(None)), RunSelection::Interactive);
        assert_eq!(RunSelection::from_flag(Some(Some(3))), RunSelection::Index(3));
    }

    #[test]
    fn test_should_select_by_index_without_timestamp() {
        let runs = runs(&["not-a-timestamp"]);
        let selected = select_index(&runs, 0).unwrap();
        assert_eq!(selected.name(), "not-a-timestamp");
    }

    #[test]
    fn test_should_fail_on_index_out_of_range() {
        let runs = runs(&["RUN_2024.01.01_00.00.00"]);
        assert!(matches!(
            select_index(&runs, 1),
            Err(RunError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_should_prompt_and_default_to_last_run() {
        let runs = runs(&["a", "b", "c"]);
        let mut output = Vec::new();
        let selected = prompt_for_run(&runs, "\n".as_bytes(), &mut output).unwrap();
        assert_eq!(selected.name(), "c");

        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            "\n 0: a\n 1: b\n 2: c <default>\n\nwhich run? <enter for default>: "
        );
    }

    #[test]
    fn test_should_prompt_and_take_given_index() {
        let runs = runs(&["a", "b", "c"]);
        let selected = prompt_for_run(&runs, " 1 \n".as_bytes(), std::io::sink()).unwrap();
        assert_eq!(selected.name(), "b");
    }

    #[test]
    fn test_should_reject_non_numeric_answer() {
        let runs = runs(&["a"]);
        let result = prompt_for_run(&runs, "latest\n".as_bytes(), std::io::sink());
        assert!(matches!(result, Err(RunError::InvalidSelection(s)) if s == "latest"));
    }

    #[test]
    fn test_should_not_prompt_without_runs() {
        let mut output = Vec::new();
        let result = prompt_for_run(&[], "\n".as_bytes(), &mut output);
        assert!(matches!(result, Err(RunError::NoCandidates)));
        assert!(output.is_empty());
    }

    #[test]
    fn test_should_report_selection() {
        let runs = runs(&["a", "b"]);
        let mut output = Vec::new();
        let selected = RunSelection::Index(0)
            .select(&runs, std::io::empty(), &mut output)
            .unwrap();
        assert_eq!(selected.name(), "a");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("using run 0:\n{}\n", PathBuf::from("runs").join("a").display())
        );
    }
}
