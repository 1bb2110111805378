use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::fixture::DEFAULT_SIZE;

/// Output file name used when nothing else is configured.
pub const DEFAULT_OUTPUT: &str = "mp_mat";

/// Config file looked up in the working directory (any supported extension).
pub const DEFAULT_CONFIG_NAME: &str = "mpmat";

/// Prefix for environment overrides, e.g. `MPMAT_SIZE=16`.
pub const ENV_PREFIX: &str = "MPMAT";

/// Generator settings.
///
/// Sources are layered lowest to highest: built-in defaults, the config file,
/// `MPMAT_*` environment variables, then command-line flags via
/// [`Settings::with_overrides`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Matrix side length.
    pub size: usize,
    /// Path of the fixture file.
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Settings {
    /// Load settings. An explicit `file` must exist; otherwise `mpmat.*` in
    /// the working directory is used if present.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_prefix(file, ENV_PREFIX)
    }

    pub(crate) fn load_with_prefix(file: Option<&Path>, prefix: &str) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Config::builder()
            .add_source(file_source)
            .add_source(Environment::with_prefix(prefix).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Apply command-line values on top of the loaded settings.
    pub fn with_overrides(mut self, size: Option<usize>, output: Option<PathBuf>) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}
