use std::path::Path;

use tariff::{FieldPath, RangeInfo, RangeViolation, TableRow};

use crate::ui::blocks::header::render_header;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{cell, Tone};
use crate::ui::theme;
use crate::ui::widgets::panel::{Panel, PanelStyle};

const COLUMN: usize = 10;

pub struct RangesView<'a> {
    form: &'a Path,
    field: &'a FieldPath,
    table: &'a [TableRow],
}

impl<'a> RangesView<'a> {
    pub fn new(form: &'a Path, field: &'a FieldPath, table: &'a [TableRow]) -> Self {
        Self { form, field, table }
    }

    pub fn render_header(&self, supports_color: bool, supports_unicode: bool) -> String {
        let form = self.form.display().to_string();
        let field = self.field.to_string();
        render_header(
            Icon::Ranges,
            "Tariff Ranges",
            &[("Form", &form), ("Field", &field)],
            supports_color,
            supports_unicode,
        )
    }

    pub fn render_table(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut p = Panel::new(format!(
            "{:>3} {}{}{}{}",
            "#",
            cell("from", COLUMN),
            cell("to", COLUMN),
            cell("rate", COLUMN),
            cell("flat", COLUMN),
        ))
        .style(PanelStyle::Info);

        for (index, entry) in self.table.iter().enumerate() {
            let row = &entry.row;
            let to = row
                .to_value
                .map(|v| v.to_string())
                .unwrap_or_else(|| theme::unbounded(supports_unicode).to_string());
            let lock = if entry.disabled_delete {
                Icon::Locked
            } else {
                Icon::Unlocked
            };
            p.line(format!(
                "{:>3} {}{}{}{} {}",
                index,
                cell(&row.from_value.to_string(), COLUMN),
                cell(&to, COLUMN),
                cell(row.rate.as_deref().unwrap_or("-"), COLUMN),
                cell(row.flat_amount.as_deref().unwrap_or("-"), COLUMN),
                lock.colored(supports_color, supports_unicode),
            ));
        }

        p.render(supports_color, supports_unicode)
    }

    pub fn render(
        &self,
        infos: &[RangeInfo],
        total: f64,
        supports_color: bool,
        supports_unicode: bool,
    ) -> String {
        let mut out = self.render_header(supports_color, supports_unicode);
        out.push('\n');
        out.push_str(&self.render_table(supports_color, supports_unicode));
        out.push('\n');
        out.push_str(&render_calculation(infos, total, supports_color));
        out
    }
}

/// One `units x rate + flat` line per range, then the total
pub fn render_calculation(infos: &[RangeInfo], total: f64, supports_color: bool) -> String {
    let mut out = Tone::Info.paint_bold("Calculation example", supports_color);
    out.push('\n');
    for info in infos {
        let subtotal = info.units as f64 * info.rate + info.flat_amount;
        out.push_str(&format!(
            "  {} x {} + {} = {}\n",
            info.units, info.rate, info.flat_amount, subtotal
        ));
    }
    out.push_str(&format!(
        "  {} {}\n",
        Tone::Dim.paint("total", supports_color),
        total
    ));
    out
}

pub fn render_check(
    violations: &[RangeViolation],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if violations.is_empty() {
        return format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            Tone::Success.paint("Ranges are contiguous", supports_color)
        );
    }

    let title = format!(
        "{} {} problem(s)",
        Icon::Error.colored(supports_color, supports_unicode),
        violations.len()
    );
    let mut p = Panel::new(title).style(PanelStyle::Error);
    for v in violations {
        p.line(format!(
            "{} {}",
            Icon::Arrow.render(supports_unicode),
            v
        ));
    }
    p.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tariff::RangeTable;

    #[test]
    fn table_marks_locked_rows_and_open_end() {
        let rows = RangeTable::default_rows();
        let table = RangeTable::table_datas(&rows, false);
        let field = FieldPath::parse("properties.graduatedRanges").unwrap();
        let view = RangesView::new(Path::new("form.json"), &field, &table);

        let rendered = view.render_table(false, false);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "|   0          0         1         -         - [x] |");
        assert_eq!(lines[3], "|   1          2       inf         -         - [ ] |");
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn calculation_lists_each_tier_and_total() {
        let infos = RangeTable::infos_calculation(&RangeTable::default_rows());
        let rendered = render_calculation(&infos, 0.0, false);
        assert_eq!(
            rendered,
            "Calculation example\n  1 x 0 + 0 = 0\n  1 x 0 + 0 = 0\n  total 0\n"
        );
    }

    #[test]
    fn check_reports_success_or_violations() {
        assert_eq!(render_check(&[], false, false), "[OK] Ranges are contiguous\n");

        let rendered = render_check(&[RangeViolation::Empty], false, false);
        assert!(rendered.contains("[FAIL] 1 problem(s)"));
        assert!(rendered.contains("[>] table has no ranges"));
    }
}
