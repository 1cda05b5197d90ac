//! Launching external viewers for layout and netlist artifacts.

mod klayout;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use self::klayout::{KlayoutArgs, KLAYOUT_ARGV_ENV};

use crate::error::ReportError;
use crate::pdk::Pdk;

const GDS3D: &str = "GDS3D";

/// A viewer process to start, described without starting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerCommand {
    pub program: String,
    pub args: Vec<OsString>,
    /// Set on the child process only.
    pub env: Vec<(String, String)>,
}

impl ViewerCommand {
    pub fn new(program: &str) -> Self {
        ViewerCommand {
            program: program.to_string(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg<S>(mut self, arg: S) -> Self
    where
        S: Into<OsString>,
    {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: &str, value: String) -> Self {
        self.env.push((key.to_string(), value));
        self
    }

    pub fn to_command(&self) -> std::process::Command {
        let mut command = std::process::Command::new(&self.program);
        command.args(&self.args);
        for (key, value) in &self.env {
            command.env(key, value);
        }
        command
    }
}

/// Starts viewers.
pub trait Launch {
    fn launch(&mut self, command: ViewerCommand) -> Result<(), ReportError>;
}

/// Spawns the viewer and returns without waiting for it to exit.
#[derive(Debug, Default)]
pub struct SpawnLauncher;

impl Launch for SpawnLauncher {
    fn launch(&mut self, command: ViewerCommand) -> Result<(), ReportError> {
        let child = command.to_command().spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReportError::ViewerNotInstalled {
                    viewer: command.program.clone(),
                    hint: format!("make sure `{}` is on your PATH", command.program),
                }
            } else {
                ReportError::Io(e)
            }
        })?;
        info!("Started {} with PID: {}", command.program, child.id());
        Ok(())
    }
}

/// KLayout showing every cell of the standard cell library.
pub fn cell_library(pdk: &Pdk, gds: &Path) -> ViewerCommand {
    ViewerCommand::new("klayout")
        .arg("-l")
        .arg(pdk.layer_properties())
        .arg(gds)
}

/// KLayout opening a DEF or GDS of the design through the open-design macro.
pub fn layout(pdk: &Pdk, script: &Path, target: &Path) -> ViewerCommand {
    let argv = KlayoutArgs::for_pdk(pdk).input(target.to_path_buf());
    ViewerCommand::new("klayout")
        .arg("-rm")
        .arg(script)
        .env(KLAYOUT_ARGV_ENV, argv.to_string())
}

/// xdot showing a synthesised hierarchy graph.
pub fn hierarchy(dot: &Path) -> ViewerCommand {
    ViewerCommand::new("xdot").arg(dot)
}

/// GDS3D showing the final layout in 3D.
///
/// Fails if GDS3D cannot be found on `PATH`.
pub fn gds_3d(tech: &Path, gds: &Path) -> Result<ViewerCommand, ReportError> {
    let program: PathBuf = which::which(GDS3D).map_err(|_| ReportError::ViewerNotInstalled {
        viewer: GDS3D.to_string(),
        hint: "install it from https://github.com/trilomix/GDS3D".to_string(),
    })?;
    debug!("Using GDS3D at {}", program.display());

    Ok(ViewerCommand::new(GDS3D)
        .arg("-p")
        .arg(tech)
        .arg("-i")
        .arg(gds))
}
