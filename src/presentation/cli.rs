//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::RangeField;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Tariff - pricing form helpers for billable-metric groups and graduated ranges
#[derive(Parser, Debug)]
#[command(name = "tariff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify the change between two group structures
    Diff {
        /// Old structure: JSON/YAML file, inline JSON, or '-' for none
        old: String,

        /// New structure: JSON/YAML file, inline JSON, or '-' for none
        new: String,

        /// Exit with 1 on add/remove and 2 on a structural change
        #[arg(long)]
        exit_code: bool,
    },

    /// Edit the graduated range table of a form document
    Ranges(RangesArgs),

    /// Show the effective configuration
    Config,
}

#[derive(Args, Debug)]
pub struct RangesArgs {
    /// Form document (JSON); created on first write
    #[arg(long, global = true, default_value = "form.json")]
    pub form: PathBuf,

    /// Dotted path of the range list inside the form
    #[arg(long = "field", id = "field_path", value_name = "FIELD", global = true)]
    pub field: Option<String>,

    /// Refuse every delete, as for a read-only table
    #[arg(long, global = true)]
    pub disabled: bool,

    #[command(subcommand)]
    pub command: RangesCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RangesCommand {
    /// Print the table and the calculation example
    Show,

    /// Insert a range before the open-ended last range
    Add,

    /// Set one field of one range
    Update {
        /// Zero-based row index
        index: usize,

        /// fromValue, toValue, rate or flatAmount
        field: RangeField,

        /// New value (empty clears rate/flatAmount)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Remove a range
    Delete {
        /// Zero-based row index
        index: usize,
    },

    /// Report broken contiguity (exits non-zero on violations)
    Check,
}
