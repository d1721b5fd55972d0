use tariff::{DiffLevel, GroupDiffOutcome};

use crate::ui::blocks::header::render_header;
use crate::ui::components::diff::render_document_diff;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::Tone;

pub struct DiffView<'a> {
    old_source: &'a str,
    new_source: &'a str,
    outcome: &'a GroupDiffOutcome,
}

impl<'a> DiffView<'a> {
    pub fn new(old_source: &'a str, new_source: &'a str, outcome: &'a GroupDiffOutcome) -> Self {
        Self {
            old_source,
            new_source,
            outcome,
        }
    }

    pub fn render(&self, verbose: bool, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = render_header(
            Icon::Diff,
            "Tariff Diff",
            &[("Old", self.old_source), ("New", self.new_source)],
            supports_color,
            supports_unicode,
        );
        out.push('\n');

        let report = &self.outcome.report;
        let icon = match report.level {
            DiffLevel::NoChange => Icon::Success,
            DiffLevel::AddOrRemove => Icon::Warning,
            DiffLevel::StructuralChange => Icon::Error,
        };
        out.push_str(&format!(
            "{} {}\n",
            icon.colored(supports_color, supports_unicode),
            Tone::for_level(report.level).paint_bold(report.level.as_str(), supports_color)
        ));

        for reason in &report.reasons {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                reason.describe()
            ));
        }

        if verbose && report.has_changes() {
            out.push('\n');
            out.push_str(&render_document_diff(
                &self.outcome.old_pretty,
                &self.outcome.new_pretty,
                supports_color,
            ));
        }

        out
    }
}
