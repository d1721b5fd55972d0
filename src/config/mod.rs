//! Configuration module for Tariff
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TARIFF_*)
//! 3. Project config (./tariff.toml)
//! 4. User config (~/.config/tariff/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, ResolvedConfig, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, RangesConfig, Verbosity, DEFAULT_RANGES_FIELD};
