//! Diff command handler

use anyhow::Result;
use tariff::presentation::create_group_diff_use_case;

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::views::diff::DiffView;

pub fn cmd_diff(old: &str, new: &str, exit_code: bool, ui: &UiContext) -> Result<i32> {
    if ui.json {
        emit_event(&StartEvent::new("diff"))?;
    }

    let use_case = create_group_diff_use_case();
    let outcome = use_case.execute_sources(Some(old), Some(new))?;
    let level = outcome.report.level;
    ui.debug(format!("classified as {}", level));

    let code = if exit_code { level.exit_code() } else { 0 };

    if ui.json {
        emit_event(&DataEvent::new("diff", &outcome.report))?;
        emit_event(&CompleteEvent::success("diff").with_exit_code(code))?;
        return Ok(code);
    }

    if ui.is_quiet() {
        println!("{}", level);
    } else {
        let view = DiffView::new(old, new, &outcome);
        print!("{}", view.render(ui.is_verbose(), ui.color, ui.unicode));
    }
    Ok(code)
}
