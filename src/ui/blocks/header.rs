use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::Tone;

/// Title line for a command, then one dimmed `label:` per field.
pub fn render_header(
    icon: Icon,
    title: &str,
    fields: &[(&str, &str)],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        icon.colored(supports_color, supports_unicode),
        Tone::Info.paint_bold(title, supports_color)
    );
    for (label, value) in fields {
        let label = format!("{}:", label);
        out.push_str(&Tone::Dim.paint(&label, supports_color));
        out.push(' ');
        out.push_str(value);
        out.push('\n');
    }
    out
}
