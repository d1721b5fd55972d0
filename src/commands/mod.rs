//! Command handlers for the `tariff` binary.

mod config;
mod diff;
mod project_root;
mod ranges;

use anyhow::Result;
use tariff::config::Config;
use tariff::presentation::{Cli, Commands};

use crate::ui::context::UiContext;
use crate::ui::output::report_config_warnings;

/// Run the parsed command line and return the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let root = project_root::discover_project_root(&cwd);
    let resolved = Config::resolve(Some(&root))?;

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &resolved.config);
    ui.debug(format!("project root: {}", root.display()));
    ui.debug(match &resolved.source {
        Some(path) => format!("config: {}", path.display()),
        None => "config: built-in defaults".to_string(),
    });
    report_config_warnings(&resolved, &ui)?;

    match cli.command {
        Commands::Diff {
            old,
            new,
            exit_code,
        } => diff::cmd_diff(&old, &new, exit_code, &ui),
        Commands::Ranges(args) => ranges::cmd_ranges(args, &resolved.config, &ui),
        Commands::Config => config::cmd_config(&resolved, &ui),
    }
}
