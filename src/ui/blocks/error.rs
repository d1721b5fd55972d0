use std::path::PathBuf;

use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Error panel with an optional source file and fix hint
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    message: String,
    file: Option<PathBuf>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            file: None,
            fix: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} ERROR",
            Icon::Error.colored(supports_color, supports_unicode)
        );
        let mut p = Panel::new(title).style(PanelStyle::Error);

        if let Some(file) = &self.file {
            p.line(file.display().to_string());
        }
        p.blank();
        p.line(&self.message);

        if let Some(fix) = &self.fix {
            p.blank();
            p.line(format!("FIX: {}", fix));
        }

        p.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_file_message_and_fix() {
        let rendered = ErrorBlock::new("bad row")
            .with_file("form.json")
            .with_fix("run `tariff ranges show`")
            .render(false, false);

        assert!(rendered.contains("[FAIL] ERROR"));
        assert!(rendered.contains("| form.json"));
        assert!(rendered.contains("| FIX: run `tariff ranges show`"));
    }

    #[test]
    fn file_line_is_optional() {
        let rendered = ErrorBlock::new("boom").render(false, true);
        assert_eq!(rendered.lines().count(), 5);
    }
}
