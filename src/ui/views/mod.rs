pub mod config;
pub mod diff;
pub mod ranges;
