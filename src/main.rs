//! Tariff CLI - pricing form helpers
//!
//! Usage: tariff <COMMAND>
//!
//! Commands:
//!   diff    Classify the change between two group structures
//!   ranges  Edit the graduated range table of a form document
//!   config  Show the effective configuration

mod commands;
mod ui;

use clap::Parser;
use tariff::presentation::Cli;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    match commands::run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            ui::error::print_error(&err, json);
            std::process::exit(1);
        }
    }
}
