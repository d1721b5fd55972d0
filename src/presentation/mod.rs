//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Wires use cases to their infrastructure

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, RangesArgs, RangesCommand};
pub use factory::{create_group_diff_use_case, create_range_form};
