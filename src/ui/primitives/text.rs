use crossterm::style::{Color, Stylize};
use tariff::DiffLevel;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::colors;

/// Semantic foreground of a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl Tone {
    /// How disruptive a group change reads on screen
    pub fn for_level(level: DiffLevel) -> Self {
        match level {
            DiffLevel::NoChange => Tone::Success,
            DiffLevel::AddOrRemove => Tone::Warning,
            DiffLevel::StructuralChange => Tone::Error,
        }
    }

    fn color(self) -> Color {
        match self {
            Tone::Success => colors::SUCCESS,
            Tone::Error => colors::ERROR,
            Tone::Warning => colors::WARNING,
            Tone::Info => colors::INFO,
            Tone::Dim => colors::DIM,
        }
    }

    pub fn paint(self, text: &str, supports_color: bool) -> String {
        if supports_color {
            text.with(self.color()).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn paint_bold(self, text: &str, supports_color: bool) -> String {
        if supports_color {
            text.with(self.color()).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Right-aligned table cell, `width` terminal columns wide
pub fn cell(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(fill), text)
}
