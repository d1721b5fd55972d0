use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

const CONTEXT_LINES: usize = 3;

/// Line diff of two pretty-printed documents, hunks separated by `@@`.
pub fn render_document_diff(old: &str, new: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut out = String::new();

    out.push_str(&paint("--- old", None, supports_color));
    out.push('\n');
    out.push_str(&paint("+++ new", None, supports_color));
    out.push('\n');

    for group in diff.grouped_ops(CONTEXT_LINES) {
        out.push_str(&paint("@@", None, supports_color));
        out.push('\n');
        for op in &group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                let line = format!("{}{}", sign, change.value().trim_end_matches('\n'));
                out.push_str(&paint(&line, Some(change.tag()), supports_color));
                out.push('\n');
            }
        }
    }

    out
}

fn paint(s: &str, tag: Option<ChangeTag>, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match tag {
        None => theme::colors::INFO,
        Some(ChangeTag::Delete) => theme::colors::ERROR,
        Some(ChangeTag::Insert) => theme::colors::SUCCESS,
        Some(ChangeTag::Equal) => theme::colors::DIM,
    };
    format!("{}", s.with(color))
}
