use std::fmt;

/// Fatal preprocessing errors. A pass reports at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreprocessError {
    /// Malformed condition after `%if` / `%ifdef` / `%ifndef`.
    Syntax { line: usize, snippet: String },
    /// An exclusion region is still open at end of buffer.
    Unterminated { line: usize },
}

impl fmt::Display for PreprocessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreprocessError::Syntax { line, snippet } => {
                write!(f, "%if syntax error on line {}. [{}] <-- syntax error here", line, snippet)
            }
            PreprocessError::Unterminated { line } => {
                write!(f, "unterminated %ifdef starting on line {}", line)
            }
        }
    }
}

impl std::error::Error for PreprocessError {}

impl PreprocessError {
    pub fn line(&self) -> usize {
        match self {
            PreprocessError::Syntax { line, .. } | PreprocessError::Unterminated { line } => *line,
        }
    }
}
