use std::fmt;
use std::path::PathBuf;

use crate::pdk::Pdk;

/// Environment variable the KLayout open-design macro reads its arguments from.
pub const KLAYOUT_ARGV_ENV: &str = "KLAYOUT_ARGV";

/// Arguments for the KLayout open-design macro.
///
/// The macro takes its arguments from [`KLAYOUT_ARGV_ENV`] rather than the KLayout command line,
/// so they are rendered as a single string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KlayoutArgs {
    pub input_lefs: Vec<PathBuf>,
    pub layer_tech: PathBuf,
    pub layer_properties: PathBuf,
    pub layer_map: PathBuf,
    pub input: PathBuf,
}

impl KlayoutArgs {
    /// Builds [`KlayoutArgs`] with the technology and cell files of `pdk`.
    pub fn for_pdk(pdk: &Pdk) -> Self {
        KlayoutArgs::default()
            .input_lef(pdk.tech_lef())
            .input_lef(pdk.cell_lef())
            .layer_tech(pdk.layer_tech())
            .layer_properties(pdk.layer_properties())
            .layer_map(pdk.layer_map())
    }

    /// Builds [`KlayoutArgs`] with an additional LEF to load.
    pub fn input_lef(mut self, path: PathBuf) -> Self {
        self.input_lefs.push(path);
        self
    }

    /// Builds [`KlayoutArgs`] with the specified layer technology.
    pub fn layer_tech(mut self, path: PathBuf) -> Self {
        self.layer_tech = path;
        self
    }

    /// Builds [`KlayoutArgs`] with the specified layer properties.
    pub fn layer_properties(mut self, path: PathBuf) -> Self {
        self.layer_properties = path;
        self
    }

    /// Builds [`KlayoutArgs`] with the specified LEF/DEF layer map.
    pub fn layer_map(mut self, path: PathBuf) -> Self {
        self.layer_map = path;
        self
    }

    /// Builds [`KlayoutArgs`] with the DEF or GDS to open.
    pub fn input(mut self, path: PathBuf) -> Self {
        self.input = path;
        self
    }
}

impl fmt::Display for KlayoutArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lef in &self.input_lefs {
            write!(f, "--input-lef {} ", lef.display())?;
        }
        write!(
            f,
            "--lyt {} --lyp {} --lym {} {}",
            self.layer_tech.display(),
            self.layer_properties.display(),
            self.layer_map.display(),
            self.input.display()
        )
    }
}
