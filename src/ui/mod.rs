//! Terminal rendering for the `tariff` binary.
//!
//! Views build plain strings; commands decide where they are printed.

pub mod blocks;
pub mod ci;
pub mod components;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
