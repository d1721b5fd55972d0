use tariff::config::ResolvedConfig;

use crate::ui::blocks::header::render_header;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::panel::Panel;

pub fn render_config(
    resolved: &ResolvedConfig,
    toml_text: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let source = resolved
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());

    let mut out = render_header(
        Icon::Config,
        "Tariff Config",
        &[("Source", &source)],
        supports_color,
        supports_unicode,
    );
    out.push('\n');

    let mut p = Panel::new("Effective configuration");
    p.blank();
    p.line(toml_text.trim_end());
    out.push_str(&p.render(supports_color, supports_unicode));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_labelled() {
        let rendered = render_config(&ResolvedConfig::default(), "[output]\n", false, false);
        assert!(rendered.contains("Source: built-in defaults"));
        assert!(rendered.contains("| [output]"));
    }
}
