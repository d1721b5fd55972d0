//! Group structure sources for the CLI
//!
//! An argument is inline JSON when it starts with `{`, `[` or `"`, and a
//! file path otherwise. Files ending in `.yaml`/`.yml` are converted to JSON
//! first; file content that fails to convert is handed over as raw text so
//! the differ can classify it. A path that doesn't exist is an error.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::domain::entities::GroupInput;
use crate::error::TariffResult;

/// Placeholder argument for "no grouping"
pub const MISSING_SOURCE: &str = "-";

pub fn load_group_input(source: Option<&str>) -> TariffResult<GroupInput> {
    let Some(source) = source.filter(|s| !s.trim().is_empty() && *s != MISSING_SOURCE) else {
        return Ok(GroupInput::Missing);
    };

    if is_inline_json(source) {
        return Ok(GroupInput::Text(source.to_string()));
    }

    let path = Path::new(source);
    if !path.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("group structure file '{}' not found", source),
        )
        .into());
    }
    let content = fs::read_to_string(path)?;
    Ok(from_file_content(path, content))
}

fn is_inline_json(source: &str) -> bool {
    source.trim_start().starts_with(['{', '[', '"'])
}

fn from_file_content(path: &Path, content: String) -> GroupInput {
    if content.trim().is_empty() {
        return GroupInput::Missing;
    }

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    if is_yaml {
        if let Ok(value) = serde_yaml_ng::from_str::<Value>(&content) {
            return GroupInput::Value(value);
        }
    }

    GroupInput::Text(content)
}
