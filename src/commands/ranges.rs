//! Ranges command handler
//!
//! `show` and `check` only read the form; seeding of an empty field is
//! reflected in the output but not saved. Edits run under the form lock.

use anyhow::Result;
use serde::Serialize;
use tariff::config::Config;
use tariff::presentation::{create_range_form, RangesArgs, RangesCommand};
use tariff::{FormStore, RangeEditor, RangeInfo, RangeViolation, TableRow, TariffResult};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::views::ranges::{render_check, RangesView};

#[derive(Debug, Serialize)]
struct RangesSnapshot {
    field: String,
    rows: Vec<TableRow>,
    infos: Vec<RangeInfo>,
    total: f64,
    violations: Vec<RangeViolation>,
}

impl RangesSnapshot {
    fn capture<S: FormStore>(editor: &mut RangeEditor<S>) -> TariffResult<Self> {
        Ok(Self {
            field: editor.path().to_string(),
            rows: editor.table_datas()?,
            infos: editor.infos_calculation()?,
            total: editor.calculation_example()?,
            violations: editor.validate()?,
        })
    }
}

pub fn cmd_ranges(args: RangesArgs, config: &Config, ui: &UiContext) -> Result<i32> {
    let (repo, field) = create_range_form(&args.form, args.field.as_deref(), config)?;
    let disabled = args.disabled || config.ranges.disabled;
    ui.debug(format!(
        "form {} field {} disabled={}",
        repo.path().display(),
        field,
        disabled
    ));

    if ui.json {
        emit_event(&StartEvent::new("ranges"))?;
    }

    let command = args.command;
    let snapshot = match &command {
        RangesCommand::Show | RangesCommand::Check => {
            let mut state = repo.load()?;
            let mut editor = RangeEditor::new(&mut state, field.clone()).disabled(disabled);
            RangesSnapshot::capture(&mut editor)?
        }
        edit => repo.update(|state| {
            let mut editor = RangeEditor::new(state, field.clone()).disabled(disabled);
            match edit {
                RangesCommand::Add => editor.add_range()?,
                RangesCommand::Update {
                    index,
                    field,
                    value,
                } => editor.handle_update(*index, *field, value)?,
                RangesCommand::Delete { index } => editor.delete_range(*index)?,
                RangesCommand::Show | RangesCommand::Check => {}
            }
            RangesSnapshot::capture(&mut editor)
        })?,
    };

    let code = match command {
        RangesCommand::Check if !snapshot.violations.is_empty() => 1,
        _ => 0,
    };

    if ui.json {
        emit_event(&DataEvent::new("ranges", &snapshot))?;
        let complete = if code == 0 {
            CompleteEvent::success("ranges")
        } else {
            CompleteEvent::failure("ranges").with_exit_code(code)
        };
        emit_event(&complete)?;
        return Ok(code);
    }

    if let RangesCommand::Check = command {
        print!("{}", render_check(&snapshot.violations, ui.color, ui.unicode));
        return Ok(code);
    }

    if let Some(done) = describe_edit(&command) {
        println!("{} {}", Icon::Success.colored(ui.color, ui.unicode), done);
        if ui.is_quiet() {
            return Ok(code);
        }
        println!();
    }

    let view = RangesView::new(repo.path(), &field, &snapshot.rows);
    print!(
        "{}",
        view.render(&snapshot.infos, snapshot.total, ui.color, ui.unicode)
    );
    Ok(code)
}

fn describe_edit(command: &RangesCommand) -> Option<String> {
    match command {
        RangesCommand::Add => Some("Added range".to_string()),
        RangesCommand::Update { index, field, .. } => {
            Some(format!("Updated {} of range {}", field, index))
        }
        RangesCommand::Delete { index } => Some(format!("Deleted range {}", index)),
        RangesCommand::Show | RangesCommand::Check => None,
    }
}
