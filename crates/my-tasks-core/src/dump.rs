//! Plain-text parameter dump: one `name=value` line per parameter.

use std::fmt::Debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{TaskError, TaskResult};

/// Ordered `name=value` lines, values in their debug representation.
#[derive(Debug, Default)]
pub struct ParamDump {
    lines: Vec<String>,
}

impl ParamDump {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, value: &dyn Debug) -> Self {
        self.lines.push(format!("{name}={value:?}"));
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Creates or truncates `path` and writes every line.
    pub fn write_to(&self, path: &Path) -> TaskResult<()> {
        let file = File::create(path).map_err(|e| TaskError::io(path, e))?;
        let mut w = BufWriter::new(file);
        for line in &self.lines {
            writeln!(w, "{line}").map_err(|e| TaskError::io(path, e))?;
        }
        w.flush().map_err(|e| TaskError::io(path, e))?;
        tracing::debug!(path = %path.display(), lines = self.lines.len(), "wrote parameter dump");
        Ok(())
    }
}
