use std::fmt;

use thiserror::Error;

/// Represents a byte span within a normalized expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: usize,
    pub end: usize,
}

impl SourceSpan {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Terminal outcome of a rejected input line.
///
/// The display string of each variant is the exact message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("Invalid identifier")]
    InvalidIdentifier,
    #[error("Invalid assignment")]
    InvalidAssignment,
    #[error("Unknown variable")]
    UnknownVariable,
    #[error("Invalid expression")]
    InvalidExpression,
    #[error("Unknown command")]
    UnknownCommand,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid exponent")]
    InvalidExponent,
}

/// A classified failure plus the context that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub span: Option<SourceSpan>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            span: None,
            notes: Vec::new(),
        }
    }

    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Diagnostic {}

/// I/O failures of the calculator binary and session drivers.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub type Result<T> = std::result::Result<T, CalcError>;
