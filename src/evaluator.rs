use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::{
    ast::{BinaryOp, PostfixKind, PostfixToken, UnaryOp},
    diagnostics::{Diagnostic, ErrorKind, SourceSpan},
};

/// Reduces a postfix sequence to a single integer.
///
/// A binary operator that finds fewer than two values is a malformed
/// expression; only explicit sign tokens negate a lone value.
pub fn evaluate(tokens: &[PostfixToken]) -> Result<BigInt, Diagnostic> {
    let mut stack: Vec<BigInt> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match &token.kind {
            PostfixKind::Operand(value) => stack.push(value.clone()),
            PostfixKind::Unary(op) => {
                let value = pop(&mut stack, token.span)?;
                stack.push(match op {
                    UnaryOp::Plus => value,
                    UnaryOp::Minus => -value,
                });
            }
            PostfixKind::Binary(op) => {
                let right = pop(&mut stack, token.span)?;
                let left = pop(&mut stack, token.span)?;
                stack.push(apply(*op, left, right, token.span)?);
            }
        }
    }
    match (stack.pop(), stack.is_empty()) {
        (Some(result), true) => Ok(result),
        (None, _) => {
            Err(Diagnostic::new(ErrorKind::InvalidExpression).with_note("nothing to evaluate"))
        }
        (Some(_), false) => Err(Diagnostic::new(ErrorKind::InvalidExpression)
            .with_note("operands are missing an operator between them")),
    }
}

fn pop(stack: &mut Vec<BigInt>, span: SourceSpan) -> Result<BigInt, Diagnostic> {
    stack.pop().ok_or_else(|| {
        Diagnostic::new(ErrorKind::InvalidExpression)
            .with_span(span)
            .with_note("operator is missing an operand")
    })
}

/// Applies `op`. Division truncates toward zero.
pub fn apply(
    op: BinaryOp,
    left: BigInt,
    right: BigInt,
    span: SourceSpan,
) -> Result<BigInt, Diagnostic> {
    let value = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Subtract => left - right,
        BinaryOp::Multiply => left * right,
        BinaryOp::Divide => {
            if right.is_zero() {
                return Err(Diagnostic::new(ErrorKind::DivisionByZero).with_span(span));
            }
            left / right
        }
        BinaryOp::Power => {
            let exponent = right.to_u32().ok_or_else(|| {
                Diagnostic::new(ErrorKind::InvalidExponent)
                    .with_span(span)
                    .with_note(format!("exponent {right} is negative or too large"))
            })?;
            left.pow(exponent)
        }
    };
    Ok(value)
}
