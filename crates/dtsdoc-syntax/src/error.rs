use thiserror::Error;

/// Failure to tokenize or parse a declaration file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

pub type Result<T> = std::result::Result<T, ParseError>;
