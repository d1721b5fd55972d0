use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Locked,
    Unlocked,
    Diff,
    Ranges,
    Config,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Locked) => theme::icons::LOCKED,
            (true, Icon::Unlocked) => theme::icons::UNLOCKED,
            (true, Icon::Diff) => theme::icons::DIFF,
            (true, Icon::Ranges) => theme::icons::RANGES,
            (true, Icon::Config) => theme::icons::CONFIG,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Locked) => theme::icons_ascii::LOCKED,
            (false, Icon::Unlocked) => theme::icons_ascii::UNLOCKED,
            (false, Icon::Diff) => theme::icons_ascii::DIFF,
            (false, Icon::Ranges) => theme::icons_ascii::RANGES,
            (false, Icon::Config) => theme::icons_ascii::CONFIG,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::Locked | Icon::Unlocked => theme::colors::DIM,
            Icon::Diff | Icon::Ranges | Icon::Config => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
