use tariff::config::ResolvedConfig;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::ci::Annotation;
use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::WarningEvent};

/// Report unknown config keys: NDJSON events in `--json` mode, else a
/// warning panel on stderr (suppressed when quiet).
pub fn report_config_warnings(resolved: &ResolvedConfig, ui: &UiContext) -> std::io::Result<()> {
    if ui.json {
        for w in &resolved.warnings {
            emit_event(&WarningEvent::from(w))?;
        }
        return Ok(());
    }

    if ui.caps.github_actions {
        for w in &resolved.warnings {
            let annotation = Annotation::warning(format!("Unknown config key '{}'", w.key))
                .file(&w.file)
                .line(w.line)
                .title("Tariff config");
            println!("{}", annotation);
        }
    }

    if ui.is_quiet() {
        return Ok(());
    }
    eprint!("{}", render_config_warnings(resolved, ui.color, ui.unicode));
    Ok(())
}

pub fn render_config_warnings(
    resolved: &ResolvedConfig,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = WarningBlock::new("Config warnings");
    for w in &resolved.warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        block.push(format!("Unknown config key '{}' in {}", w.key, location));
        if let Some(suggestion) = &w.suggestion {
            block.push(format!("  Did you mean '{}'?", suggestion));
        }
    }
    block.render(supports_color, supports_unicode)
}
