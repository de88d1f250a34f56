use std::fmt;

use num_bigint::BigInt;

use crate::diagnostics::SourceSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// Higher binds tighter. Operators of equal priority evaluate left to
    /// right, `^` included, so `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
    pub const fn priority(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Subtract => 1,
            BinaryOp::Multiply | BinaryOp::Divide => 2,
            BinaryOp::Power => 3,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
            BinaryOp::Power => '^',
        }
    }
}

/// A sign standing where an operand is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl UnaryOp {
    /// Whether a stacked sign is applied before `op` is stacked.
    ///
    /// Signs bind tighter than `*` and `/` but looser than `^`:
    /// `8 / -2 / 2` is `(8 / (-2)) / 2` while `-2 ^ 2` is `-(2 ^ 2)`.
    pub const fn yields_to(self, op: BinaryOp) -> bool {
        !matches!(op, BinaryOp::Power)
    }

    pub const fn symbol(self) -> char {
        match self {
            UnaryOp::Plus => '+',
            UnaryOp::Minus => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostfixKind {
    Operand(BigInt),
    Unary(UnaryOp),
    Binary(BinaryOp),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostfixToken {
    pub kind: PostfixKind,
    pub span: SourceSpan,
}

impl PostfixToken {
    pub fn new(kind: PostfixKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PostfixKind::Operand(value) => write!(f, "{value}"),
            PostfixKind::Unary(op) => write!(f, "{}u", op.symbol()),
            PostfixKind::Binary(op) => write!(f, "{}", op.symbol()),
        }
    }
}

/// Renders a postfix sequence as space separated tokens, e.g. `5 -u 3 +`.
pub fn display_postfix(tokens: &[PostfixToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
