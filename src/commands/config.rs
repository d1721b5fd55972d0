//! Config command handler

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tariff::config::{Config, ResolvedConfig};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::views::config::render_config;

#[derive(Serialize)]
struct ConfigData<'a> {
    source: Option<&'a Path>,
    config: &'a Config,
}

pub fn cmd_config(resolved: &ResolvedConfig, ui: &UiContext) -> Result<i32> {
    if ui.json {
        emit_event(&StartEvent::new("config"))?;
        let data = ConfigData {
            source: resolved.source.as_deref(),
            config: &resolved.config,
        };
        emit_event(&DataEvent::new("config", data))?;
        emit_event(&CompleteEvent::success("config"))?;
        return Ok(0);
    }

    let toml_text = toml::to_string_pretty(&resolved.config)?;
    print!("{}", render_config(resolved, &toml_text, ui.color, ui.unicode));
    Ok(0)
}
