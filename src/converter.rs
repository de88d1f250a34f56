//! Infix to postfix conversion over a normalized expression.

use num_bigint::BigInt;

use crate::{
    ast::{BinaryOp, PostfixKind, PostfixToken, UnaryOp},
    diagnostics::{Diagnostic, ErrorKind, SourceSpan},
    environment::Environment,
    lexer::{Lexer, Token, TokenKind, parse_integer},
};

/// Converts `expression` into postfix order, substituting variables from
/// `env`. The first error aborts the conversion.
pub fn to_postfix(expression: &str, env: &Environment) -> Result<Vec<PostfixToken>, Diagnostic> {
    let mut converter = Converter::new(env);
    for token in Lexer::new(expression) {
        converter.push(token)?;
    }
    converter.finish()
}

/// Entries of the operator stack. A closing parenthesis is never stored.
#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Open(SourceSpan),
    Unary(UnaryOp, SourceSpan),
    Binary(BinaryOp, SourceSpan),
}

impl StackEntry {
    fn into_postfix(self) -> Option<PostfixToken> {
        match self {
            StackEntry::Open(_) => None,
            StackEntry::Unary(op, span) => Some(PostfixToken::new(PostfixKind::Unary(op), span)),
            StackEntry::Binary(op, span) => Some(PostfixToken::new(PostfixKind::Binary(op), span)),
        }
    }
}

struct Converter<'env> {
    env: &'env Environment,
    operators: Vec<StackEntry>,
    output: Vec<PostfixToken>,
    expect_operand: bool,
}

impl<'env> Converter<'env> {
    fn new(env: &'env Environment) -> Self {
        Self {
            env,
            operators: Vec::new(),
            output: Vec::new(),
            expect_operand: true,
        }
    }

    fn push(&mut self, token: Token<'_>) -> Result<(), Diagnostic> {
        match token.kind {
            TokenKind::Number | TokenKind::Identifier | TokenKind::Invalid => {
                let value = self.operand(&token)?;
                self.output
                    .push(PostfixToken::new(PostfixKind::Operand(value), token.span));
                self.expect_operand = false;
            }
            TokenKind::LParen => {
                self.operators.push(StackEntry::Open(token.span));
                self.expect_operand = true;
            }
            TokenKind::RParen => {
                self.close_group(token.span)?;
                self.expect_operand = false;
            }
            TokenKind::Plus | TokenKind::Minus if self.expect_operand => {
                let op = if token.kind == TokenKind::Minus {
                    UnaryOp::Minus
                } else {
                    UnaryOp::Plus
                };
                self.operators.push(StackEntry::Unary(op, token.span));
            }
            TokenKind::Plus => self.binary(BinaryOp::Add, token.span),
            TokenKind::Minus => self.binary(BinaryOp::Subtract, token.span),
            TokenKind::Star => self.binary(BinaryOp::Multiply, token.span),
            TokenKind::Slash => self.binary(BinaryOp::Divide, token.span),
            TokenKind::Caret => self.binary(BinaryOp::Power, token.span),
        }
        Ok(())
    }

    fn operand(&self, token: &Token<'_>) -> Result<BigInt, Diagnostic> {
        match token.kind {
            TokenKind::Number => parse_integer(token.lexeme).ok_or_else(|| {
                Diagnostic::new(ErrorKind::InvalidIdentifier).with_span(token.span)
            }),
            TokenKind::Identifier => self.env.get(token.lexeme).cloned().ok_or_else(|| {
                Diagnostic::new(ErrorKind::UnknownVariable)
                    .with_span(token.span)
                    .with_note(format!("`{}` has not been assigned", token.lexeme))
            }),
            _ => Err(Diagnostic::new(ErrorKind::InvalidIdentifier)
                .with_span(token.span)
                .with_note(format!("`{}` is neither a number nor a name", token.lexeme))),
        }
    }

    /// Pops every stacked operator whose priority is not lower than `op`'s,
    /// and every sign that yields to `op`, then stacks `op`.
    fn binary(&mut self, op: BinaryOp, span: SourceSpan) {
        while let Some(&top) = self.operators.last() {
            let pops = match top {
                StackEntry::Open(_) => false,
                StackEntry::Unary(unary, _) => unary.yields_to(op),
                StackEntry::Binary(binary, _) => binary.priority() >= op.priority(),
            };
            if !pops {
                break;
            }
            self.operators.pop();
            self.output.extend(top.into_postfix());
        }
        self.operators.push(StackEntry::Binary(op, span));
        self.expect_operand = true;
    }

    fn close_group(&mut self, span: SourceSpan) -> Result<(), Diagnostic> {
        while let Some(entry) = self.operators.pop() {
            match entry.into_postfix() {
                Some(token) => self.output.push(token),
                None => return Ok(()),
            }
        }
        Err(Diagnostic::new(ErrorKind::InvalidExpression)
            .with_span(span)
            .with_note("`)` without a matching `(`"))
    }

    fn finish(mut self) -> Result<Vec<PostfixToken>, Diagnostic> {
        while let Some(entry) = self.operators.pop() {
            match entry {
                StackEntry::Open(span) => {
                    return Err(Diagnostic::new(ErrorKind::InvalidExpression)
                        .with_span(span)
                        .with_note("`(` is never closed"));
                }
                other => self.output.extend(other.into_postfix()),
            }
        }
        Ok(self.output)
    }
}
