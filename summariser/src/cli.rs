use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct CliArgs {
    /// Show all standard cells of the reference cell library and exit.
    #[arg(long)]
    pub show_sky130: bool,

    /// Directory holding the flow runs.
    ///
    /// Falls back to `runs` in the working directory if this does not exist.
    #[arg(long, env = "OPENLANE_RUNS_DIR")]
    pub runs: Option<PathBuf>,

    /// Choose a run by index. If not given use the latest. Without a value, show a menu.
    #[arg(long)]
    pub run: Option<Option<usize>>,

    /// Choose the completed run with the fewest violations.
    #[arg(long, conflicts_with = "run")]
    pub fewest_violations: bool,

    /// Show the DRC report.
    #[arg(long)]
    pub drc: bool,

    /// Show violations and errors from the metrics summary.
    #[arg(long)]
    pub summary: bool,

    /// Show the full metrics summary.
    #[arg(long)]
    pub full_summary: bool,

    /// Show the synthesised hierarchy.
    #[arg(long)]
    pub synth: bool,

    /// Show cell usage after synthesis.
    #[arg(long)]
    pub yosys_report: bool,

    /// Find and list any antenna violations.
    #[arg(long)]
    pub antenna: bool,

    /// Show the floorplan.
    #[arg(long)]
    pub floorplan: bool,

    /// Show the power distribution network.
    #[arg(long)]
    pub pdn: bool,

    /// Show the global placement.
    #[arg(long)]
    pub global_placement: bool,

    /// Show the detailed placement.
    #[arg(long)]
    pub detailed_placement: bool,

    /// Show the final GDS and exit.
    #[arg(long)]
    pub gds: bool,

    /// Show the final GDS in 3D.
    #[arg(long = "gds-3d")]
    pub gds_3d: bool,

    /// PDK variant below `PDK_ROOT`.
    #[arg(long, default_value = "sky130A")]
    pub pdk: String,

    /// Standard cell library within the PDK.
    #[arg(long, default_value = "sky130_fd_sc_hd")]
    pub scl: String,

    /// KLayout macro that opens a design from `KLAYOUT_ARGV`.
    #[arg(long, env = "KLAYOUT_OPEN_DESIGN_SCRIPT", default_value = "open_design.py")]
    pub klayout_script: PathBuf,

    /// GDS3D technology file.
    #[arg(long, default_value = "sky130.txt")]
    pub gds3d_tech: PathBuf,
}
