use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Warning panel; renders nothing when no lines were pushed
#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        if self.is_empty() {
            return String::new();
        }

        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            self.title
        );
        let mut p = Panel::new(header).style(PanelStyle::Warning);
        for line in &self.lines {
            p.line(line);
        }
        p.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_renders_nothing() {
        assert_eq!(WarningBlock::new("Config").render(false, false), "");
    }

    #[test]
    fn lines_are_boxed_under_title() {
        let mut block = WarningBlock::new("Config warnings");
        block.push("unknown key 'colour'");
        let rendered = block.render(false, false);
        assert!(rendered.contains("| [WARN] Config warnings |"));
        assert!(rendered.contains("| unknown key 'colour'"));
    }
}
