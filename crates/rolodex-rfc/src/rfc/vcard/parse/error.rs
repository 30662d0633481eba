//! vCard parse error types.

use thiserror::Error;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A line that does not match the content-line grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: could not parse line: {reason}")]
pub struct LexError {
    /// Logical (unfolded) line number, 1-based.
    pub line: usize,
    pub reason: String,
}

impl LexError {
    #[must_use]
    pub fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// An error that aborted parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {kind}: {message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Logical (unfolded) line number, 1-based; 0 when not tied to a line.
    pub line: usize,
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates a BEGIN/END or required-property error.
    #[must_use]
    pub fn structural(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Structural, line, message)
    }

    /// Creates an error for a repeated single-instance property or parameter.
    #[must_use]
    pub fn duplicate(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Duplicate, line, message)
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Value, line, message)
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        Self::new(
            ParseErrorKind::Lex,
            err.line,
            format!("could not parse line: {}", err.reason),
        )
    }
}

/// The kind of parse error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Line does not match the content-line grammar.
    #[error("lex error")]
    Lex,
    /// BEGIN/END misuse, unterminated card, or missing required property.
    #[error("structural error")]
    Structural,
    /// Single-instance property or parameter repeated.
    #[error("duplicate")]
    Duplicate,
    /// Value or parameter fails its shape or enumeration.
    #[error("invalid value")]
    Value,
    /// Input exceeds the configured size limit.
    #[error("input too large")]
    TooLarge,
}
