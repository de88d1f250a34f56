//! Line classification and dispatch into the calculator core.

use num_bigint::BigInt;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::{
    calculator::Calculator,
    diagnostics::{Diagnostic, ErrorKind},
};

pub const HELP_TEXT: &str = "The program calculates expressions over integers of any size.\n\
Operators: + - * / ^ and parentheses. Repeated signs collapse: 2 -- 3 is 2 + 3.\n\
Division truncates toward zero; ^ evaluates left to right.\n\
Assign with `name = value`, where name is made of latin letters.\n\
Commands: /help, /exit";

const OPERAND: &str = r"(?:[+-]?\d+|[a-zA-Z]+)";
const OPERATOR: &str = r"(?:[+-](?:[\s+-]*[+-])?|[*^/])";

static COMMAND: Lazy<Regex> = Lazy::new(|| compile(r"^/\w*$"));
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| compile(r"^[a-zA-Z]+$"));
static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| compile(r"^\w+(?:\s*=\s*(?:\w+|[+-]?\d+))+$"));
static EXPRESSION: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"^[(\s]*[+-]?[(\s]*{OPERAND}(?:[)\s]*{OPERATOR}[(\s]*{OPERAND})*[)\s]*$"
    ))
});
static OPERATOR_RUN: Lazy<Regex> = Lazy::new(|| compile(r"[*/^]{2,}"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid built-in pattern {pattern:?}: {err}"))
}

/// What a trimmed input line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Blank,
    Command(&'a str),
    Lookup(&'a str),
    Assignment(&'a str),
    Expression(&'a str),
    Malformed(ErrorKind),
}

/// Classifies a line. Checks run in a fixed order: commands, bare names,
/// assignments, expressions.
pub fn classify(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.is_empty() {
        Input::Blank
    } else if COMMAND.is_match(line) {
        Input::Command(line)
    } else if IDENTIFIER.is_match(line) {
        Input::Lookup(line)
    } else if ASSIGNMENT.is_match(line) || line.contains('=') {
        Input::Assignment(line)
    } else if EXPRESSION.is_match(line) {
        Input::Expression(line)
    } else if OPERATOR_RUN.is_match(line) {
        Input::Malformed(ErrorKind::InvalidExpression)
    } else {
        Input::Malformed(ErrorKind::InvalidIdentifier)
    }
}

/// Outcome of one line, free of any rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Nothing,
    Value(BigInt),
    Help,
    Quit,
    Error(Diagnostic),
}

impl From<Result<BigInt, Diagnostic>> for Response {
    fn from(result: Result<BigInt, Diagnostic>) -> Self {
        result.map_or_else(Response::Error, Response::Value)
    }
}

/// Renders a response the way the interactive loop prints it.
pub fn render(response: &Response) -> Option<String> {
    match response {
        Response::Nothing => None,
        Response::Value(value) => Some(value.to_string()),
        Response::Help => Some(HELP_TEXT.to_string()),
        Response::Quit => Some("Bye!".to_string()),
        Response::Error(diagnostic) => Some(diagnostic.to_string()),
    }
}

/// One interactive session: owns the calculator for its whole lifetime.
#[derive(Debug, Default)]
pub struct Session {
    calculator: Calculator,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn handle_line(&mut self, line: &str) -> Response {
        let input = classify(line);
        debug!(?input, "classified");
        let response = self.dispatch(input);
        if let Response::Error(diagnostic) = &response {
            debug!(
                kind = ?diagnostic.kind,
                span = ?diagnostic.span,
                notes = ?diagnostic.notes,
                "rejected"
            );
        }
        response
    }

    fn dispatch(&mut self, input: Input<'_>) -> Response {
        match input {
            Input::Blank => Response::Nothing,
            Input::Command("/exit") => Response::Quit,
            Input::Command("/help") => Response::Help,
            Input::Command(_) => Response::Error(Diagnostic::new(ErrorKind::UnknownCommand)),
            Input::Lookup(name) => match self.calculator.lookup(name) {
                Some(value) => Response::Value(value.clone()),
                None => Response::Error(Diagnostic::new(ErrorKind::UnknownVariable)),
            },
            Input::Assignment(statement) => match self.calculator.assign(statement) {
                Ok(()) => Response::Nothing,
                Err(diagnostic) => Response::Error(diagnostic),
            },
            Input::Expression(expression) => self.calculator.evaluate(expression).into(),
            Input::Malformed(kind) => Response::Error(Diagnostic::new(kind)),
        }
    }
}
