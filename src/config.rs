use std::path::PathBuf;

use h5ex_hdf5::{IntAttributeLayout, path_has_hdf5_extension};
use serde::{Deserialize, Serialize};

/// File the example writes when run as a program
pub const DEFAULT_FILE: &str = "h5ex_t_intatt.h5";

/// Everything the example needs to know about where and how to store the grid.
///
/// The program always runs with [`ExampleConfig::default`], the TOML form is for logging the
/// effective settings and for describing other layouts in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleConfig {
    pub file: PathBuf,
    pub layout: IntAttributeLayout,
}

impl Default for ExampleConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE),
            layout: IntAttributeLayout::default(),
        }
    }
}

impl ExampleConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let cfg: Self = toml::from_str(s)?;
        cfg.warn_on_unusual_path();
        Ok(cfg)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Same settings, writing to `file` instead
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = file.into();
        self.warn_on_unusual_path();
        self
    }

    fn warn_on_unusual_path(&self) {
        if !path_has_hdf5_extension(&self.file) {
            log::warn!(
                "{} does not have an HDF5 file extension, writing it anyway",
                self.file.display()
            );
        }
    }
}
