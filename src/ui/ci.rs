//! GitHub Actions workflow commands
//!
//! Errors and config warnings are mirrored as `::error` / `::warning`
//! lines on stdout so they show up inline on the offending file.

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    level: &'static str,
    message: String,
    file: Option<String>,
    line: Option<usize>,
    title: Option<String>,
}

impl Annotation {
    pub fn error(message: impl Into<String>) -> Self {
        Self::new("error", message.into())
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new("warning", message.into())
    }

    fn new(level: &'static str, message: String) -> Self {
        Self {
            level,
            message,
            file: None,
            line: None,
            title: None,
        }
    }

    pub fn file(mut self, file: &Path) -> Self {
        self.file = Some(file.to_string_lossy().into_owned());
        self
    }

    pub fn line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut props = Vec::new();
        if let Some(file) = &self.file {
            props.push(format!("file={}", escape_property(file)));
        }
        if let (Some(line), Some(_)) = (self.line, &self.file) {
            props.push(format!("line={}", line));
        }
        if let Some(title) = &self.title {
            props.push(format!("title={}", escape_property(title)));
        }

        write!(f, "::{}", self.level)?;
        if !props.is_empty() {
            write!(f, " {}", props.join(","))?;
        }
        write!(f, "::{}", escape_data(&self.message))
    }
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

// Property values additionally reserve `:` and `,`.
fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
