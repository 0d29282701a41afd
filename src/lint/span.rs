//! Source locations of diagnostics.

use std::path::PathBuf;

/// A line in a logging document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// File path.
    pub file: PathBuf,
    /// Line (1-indexed).
    pub line: usize,
    /// Column (1-indexed).
    pub column: usize,
}

impl Span {
    /// Create a span at the first non-blank column of `line`.
    pub fn line(file: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column: 1,
        }
    }

    /// Set the column.
    pub fn at_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_line_constructor() {
        let span = Span::line("log_config.yaml", 12);
        assert_eq!(span.line, 12);
        assert_eq!(span.column, 1);
        assert_eq!(span.file, PathBuf::from("log_config.yaml"));
    }

    #[test]
    fn span_with_column() {
        let span = Span::line("log_config.yaml", 3).at_column(5);
        assert_eq!(span.column, 5);
    }
}
