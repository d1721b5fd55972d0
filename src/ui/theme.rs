use crossterm::style::Color;

/// Design tokens for the Tariff CLI UI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const LOCKED: &str = "●";
    pub const UNLOCKED: &str = "○";

    // Command identifiers (used in headers).
    pub const DIFF: &str = "Δ";
    pub const RANGES: &str = "▤";
    pub const CONFIG: &str = "⚙";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const LOCKED: &str = "[x]";
    pub const UNLOCKED: &str = "[ ]";

    pub const DIFF: &str = "[DIFF]";
    pub const RANGES: &str = "[RANGES]";
    pub const CONFIG: &str = "[CONFIG]";
}

/// Box-drawing characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

pub const BORDERS: BorderSet = BorderSet {
    top_left: "╭",
    top_right: "╮",
    bottom_left: "╰",
    bottom_right: "╯",
    horizontal: "─",
    vertical: "│",
};

pub const BORDERS_ASCII: BorderSet = BorderSet {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    horizontal: "-",
    vertical: "|",
};

pub fn borders(supports_unicode: bool) -> &'static BorderSet {
    if supports_unicode {
        &BORDERS
    } else {
        &BORDERS_ASCII
    }
}

/// Infinity sign for open-ended ranges
pub fn unbounded(supports_unicode: bool) -> &'static str {
    if supports_unicode {
        "∞"
    } else {
        "inf"
    }
}
