//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TariffResult;

use super::loader::{self, ConfigWarning, ResolvedConfig};

/// Form field holding the graduated ranges when none is given
pub const DEFAULT_RANGES_FIELD: &str = "properties.graduatedRanges";

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Combine with the `-v` count from the command line
    pub fn with_flag_count(self, count: u8) -> Self {
        match count {
            0 => self,
            1 => self.max(Verbosity::Verbose),
            _ => Verbosity::Debug,
        }
    }
}

/// Range table defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangesConfig {
    /// Dotted form path of the range list
    #[serde(default = "default_ranges_field")]
    pub field: String,

    /// Treat tables as read-only for deletes
    #[serde(default)]
    pub disabled: bool,
}

impl Default for RangesConfig {
    fn default() -> Self {
        Self {
            field: default_ranges_field(),
            disabled: false,
        }
    }
}

fn default_ranges_field() -> String {
    DEFAULT_RANGES_FIELD.to_string()
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub ranges: RangesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TariffResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TariffResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project config, else user config, else defaults; env overrides on top
    pub fn resolve(project_root: Option<&Path>) -> TariffResult<ResolvedConfig> {
        loader::resolve(project_root)
    }

    /// Apply environment variable overrides (TARIFF_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
