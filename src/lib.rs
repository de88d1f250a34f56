//! Arbitrary-precision integer calculator with named variables.
//! Expressions are normalized, converted to postfix and evaluated against
//! a per-session variable store; `frontend` and `repl` drive it line by line.

pub mod assignment;
pub mod ast;
pub mod calculator;
pub mod converter;
pub mod diagnostics;
pub mod environment;
pub mod evaluator;
pub mod frontend;
pub mod lexer;
pub mod normalizer;
pub mod repl;

pub use calculator::Calculator;
pub use diagnostics::{CalcError, Diagnostic, ErrorKind, SourceSpan};
pub use environment::Environment;
pub use frontend::{Input, Response, Session};
pub use repl::{Repl, ReplConfig};
