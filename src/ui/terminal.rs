use is_terminal::IsTerminal;

/// What the attached terminal and environment allow us to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    /// Running as a GitHub Actions step; enables workflow annotations
    pub github_actions: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::from_env(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    fn from_env(env: impl Fn(&str) -> Option<String>, stdout_is_tty: bool) -> Self {
        let set = |key: &str| env(key).is_some_and(|v| !v.is_empty());
        let dumb = env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

        // First non-empty locale variable decides; only C/POSIX is ASCII.
        let ascii_locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .iter()
            .find_map(|key| env(*key).filter(|v| !v.is_empty()))
            .is_some_and(|locale| {
                locale.eq_ignore_ascii_case("c") || locale.eq_ignore_ascii_case("posix")
            });

        let github_actions = env("GITHUB_ACTIONS").as_deref() == Some("true");

        Self {
            supports_color: stdout_is_tty && !dumb && !set("NO_COLOR"),
            supports_unicode: !dumb && !ascii_locale,
            is_ci: github_actions || set("CI"),
            github_actions,
        }
    }
}
