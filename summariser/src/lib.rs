//! Summaries and layout views of physical-design flow runs.
//!
//! Reads the artifacts a flow run left behind and renders them for a person. Nothing is
//! computed or written: text reports are printed and layouts are handed to external viewers.

#[macro_use]
extern crate log;

use std::io::{BufRead, Write};
use std::path::Path;

use openlane_run_model::{discover_runs, locate_runs_dir, RunSelection, DEFAULT_RUNS_DIR};

pub mod cli;
pub mod error;
pub mod locate;
pub mod pdk;
pub mod rank;
pub mod report;
pub mod viewer;

pub use cli::CliArgs;
pub use error::ReportError;
pub use locate::Artifact;
pub use pdk::Pdk;
pub use viewer::{Launch, SpawnLauncher, ViewerCommand};

/// Produce every report requested by `args`.
///
/// Report text and run selection prompts go to `output`, answers are read from `input`. Viewers
/// are started through `launcher`. Showing the cell library or the final GDS ends the invocation
/// once the viewer has started.
pub fn execute<R, W, L>(
    args: &CliArgs,
    pdk: &Pdk,
    input: R,
    mut output: W,
    launcher: &mut L,
) -> Result<(), ReportError>
where
    R: BufRead,
    W: Write,
    L: Launch,
{
    if args.show_sky130 {
        let gds = pdk.cell_library_gds();
        if !gds.is_file() {
            return Err(ReportError::NotFound(gds));
        }
        return launcher.launch(viewer::cell_library(pdk, &gds));
    }

    let runs_dir = locate_runs_dir(args.runs.as_deref(), Path::new(DEFAULT_RUNS_DIR))?;
    if let Some(explicit) = args.runs.as_deref().filter(|explicit| **explicit != *runs_dir) {
        writeln!(
            output,
            "warning: runs directory {} not found, using {}",
            explicit.display(),
            runs_dir.display()
        )?;
    }
    let runs = discover_runs(&runs_dir)?;
    let run = if args.fewest_violations {
        writeln!(output, "using run with fewest violations:")?;
        rank::select_fewest_violations(&runs, &mut output)?
    } else {
        RunSelection::from_flag(args.run).select(&runs, input, &mut output)?
    };
    info!("Reporting on run {}", run.path().display());
    let run = run.path();

    if args.summary {
        let path = Artifact::Metrics.resolve(run, &mut output)?;
        let rows = report::MetricsReader::read_from_file(&path)?;
        report::write_summary(&rows, &mut output)?;
    }

    if args.full_summary {
        let path = Artifact::Metrics.resolve(run, &mut output)?;
        let rows = report::MetricsReader::read_from_file(&path)?;
        report::write_full_summary(&rows, &mut output)?;
    }

    if args.drc {
        // A clean run may not leave a report behind
        match Artifact::DrcReport.resolve_optional(run, &mut output)? {
            Some(path) => report::write_drc_report(std::fs::File::open(path)?, &mut output)?,
            None => writeln!(output, "no DRC report found, DRC clean?")?,
        }
    }

    if args.synth {
        let path = Artifact::Hierarchy.resolve(run, &mut output)?;
        launch_or_warn(launcher, viewer::hierarchy(&path), &mut output)?;
    }

    if args.yosys_report {
        let path = Artifact::SynthesisStats.resolve(run, &mut output)?;
        report::write_synthesis_stats(std::fs::File::open(&path)?, &path, &mut output)?;
    }

    if args.antenna {
        match Artifact::AntennaLog.resolve_optional(run, &mut output)? {
            Some(path) => {
                report::write_antenna_report(std::fs::File::open(path)?, &mut output)?;
            }
            None => writeln!(output, "no antenna report found, did the run finish?")?,
        }
    }

    for (requested, artifact) in [
        (args.floorplan, Artifact::Floorplan),
        (args.pdn, Artifact::PowerDistribution),
        (args.global_placement, Artifact::GlobalPlacement),
        (args.detailed_placement, Artifact::DetailedPlacement),
    ] {
        if requested {
            let path = artifact.resolve(run, &mut output)?;
            debug!("Opening {artifact} from {}", path.display());
            let command = viewer::layout(pdk, &args.klayout_script, &path);
            launch_or_warn(launcher, command, &mut output)?;
        }
    }

    if args.gds_3d {
        let gds = Artifact::FinalGds.resolve(run, &mut output)?;
        let command = viewer::gds_3d(&args.gds3d_tech, &gds)?;
        launcher.launch(command)?;
    }

    if args.gds {
        let path = Artifact::FinalGds.resolve(run, &mut output)?;
        return launcher.launch(viewer::layout(pdk, &args.klayout_script, &path));
    }

    Ok(())
}

/// Start a viewer, reporting a missing viewer program on `output` instead of failing.
///
/// Later reports of the same invocation still run.
fn launch_or_warn<L, W>(
    launcher: &mut L,
    command: ViewerCommand,
    mut output: W,
) -> Result<(), ReportError>
where
    L: Launch,
    W: Write,
{
    match launcher.launch(command) {
        Err(ReportError::ViewerNotInstalled { viewer, hint }) => {
            debug!("Could not start {viewer}, continuing");
            writeln!(output, "warning: {viewer} is not available, {hint}")?;
            Ok(())
        }
        result => result,
    }
}
