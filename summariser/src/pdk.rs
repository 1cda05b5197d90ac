use std::env;
use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// Environment variable pointing at the installed PDKs.
pub const PDK_ROOT_ENV: &str = "PDK_ROOT";

/// Read the PDK root from [`PDK_ROOT_ENV`].
///
/// An empty value counts as unset.
pub fn pdk_root_from_env() -> Result<PathBuf, ReportError> {
    match env::var_os(PDK_ROOT_ENV) {
        Some(root) if !root.is_empty() => Ok(PathBuf::from(root)),
        _ => Err(ReportError::MissingEnvironment(PDK_ROOT_ENV)),
    }
}

/// Locations of the technology files within one PDK variant and cell library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pdk {
    root: PathBuf,
    name: String,
    scl: String,
}

impl Pdk {
    pub fn new<P>(root: P, name: &str, scl: &str) -> Self
    where
        P: Into<PathBuf>,
    {
        Pdk {
            root: root.into(),
            name: name.to_string(),
            scl: scl.to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// GDS holding every cell of the standard cell library.
    pub fn cell_library_gds(&self) -> PathBuf {
        self.scl_dir()
            .join("gds")
            .join(format!("{}.gds", self.scl))
    }

    pub fn cell_lef(&self) -> PathBuf {
        self.scl_dir()
            .join("lef")
            .join(format!("{}.lef", self.scl))
    }

    pub fn tech_lef(&self) -> PathBuf {
        self.scl_dir()
            .join("techlef")
            .join(format!("{}__nom.tlef", self.scl))
    }

    /// KLayout layer technology.
    pub fn layer_tech(&self) -> PathBuf {
        self.klayout_tech_file("lyt")
    }

    /// KLayout layer properties.
    pub fn layer_properties(&self) -> PathBuf {
        self.klayout_tech_file("lyp")
    }

    /// Mapping from LEF/DEF layers to GDS layers.
    pub fn layer_map(&self) -> PathBuf {
        self.klayout_tech_file("map")
    }

    fn scl_dir(&self) -> PathBuf {
        self.root.join(&self.name).join("libs.ref").join(&self.scl)
    }

    fn klayout_tech_file(&self, extension: &str) -> PathBuf {
        self.root
            .join(&self.name)
            .join("libs.tech")
            .join("klayout")
            .join("tech")
            .join(format!("{}.{extension}", self.name))
    }
}
