use tariff::TariffError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::ci::Annotation;
use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::terminal::TerminalCapabilities;

/// Stable machine-readable code for `--json` error events
pub fn error_code(err: &TariffError) -> &'static str {
    match err {
        TariffError::RangeIndexOutOfBounds { .. } => "RANGE_INDEX_OUT_OF_BOUNDS",
        TariffError::RangeNotDeletable { .. } => "RANGE_NOT_DELETABLE",
        TariffError::OpenEndedRange { .. } => "OPEN_ENDED_RANGE",
        TariffError::InvalidNumber { .. } => "INVALID_NUMBER",
        TariffError::UnknownField { .. } => "UNKNOWN_FIELD",
        TariffError::InvalidFieldPath { .. } => "INVALID_FIELD_PATH",
        TariffError::InvalidFormState { .. } => "INVALID_FORM_STATE",
        TariffError::InvalidConfig { .. } => "INVALID_CONFIG",
        TariffError::Io(_) => "IO",
        TariffError::Json(_) => "JSON",
    }
}

pub fn fix_hint(err: &TariffError) -> Option<String> {
    match err {
        TariffError::RangeIndexOutOfBounds { len, .. } => Some(format!(
            "Use an index between 0 and {}. Run `tariff ranges show` to list rows.",
            len.saturating_sub(1)
        )),
        TariffError::RangeNotDeletable { index: 0 } => {
            Some("The first range is always kept; edit its bounds instead.".to_string())
        }
        TariffError::RangeNotDeletable { .. } => {
            Some("The table is disabled; drop --disabled (or ranges.disabled) to edit it.".to_string())
        }
        TariffError::OpenEndedRange { .. } => Some(
            "The last range has no upper bound. Run `tariff ranges add` to split it.".to_string(),
        ),
        TariffError::InvalidNumber { .. } => {
            Some("Bounds take whole numbers >= 0; amounts take decimals like 1.5.".to_string())
        }
        TariffError::InvalidFieldPath { .. } => {
            Some("Use a dotted path such as properties.graduatedRanges.".to_string())
        }
        TariffError::InvalidConfig { .. } => {
            Some("Fix the TOML syntax, or run `tariff config` to see the defaults.".to_string())
        }
        _ => None,
    }
}

fn error_file(err: &TariffError) -> Option<&std::path::Path> {
    match err {
        TariffError::InvalidConfig { file, .. } => Some(file.as_path()),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let Some(tariff) = err.downcast_ref::<TariffError>() else {
        return ErrorBlock::new(format!("{:#}", err)).render(supports_color, supports_unicode);
    };

    let mut block = ErrorBlock::new(tariff.to_string());
    if let Some(file) = error_file(tariff) {
        block = block.with_file(file);
    }
    if let Some(fix) = fix_hint(tariff) {
        block = block.with_fix(fix);
    }
    block.render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    let tariff = err.downcast_ref::<TariffError>();

    if json {
        let code = tariff.map(error_code).unwrap_or("ERROR");
        let event = ErrorEvent::new(code, format!("{:#}", err)).with_help(tariff.and_then(fix_hint));
        let _ = emit_event(&event);
        return;
    }

    let caps = TerminalCapabilities::detect();
    if caps.github_actions {
        let mut annotation = Annotation::error(err.to_string()).title("Tariff");
        if let Some(file) = tariff.and_then(error_file) {
            annotation = annotation.file(file);
        }
        println!("{}", annotation);
    }

    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}
