use num_bigint::BigInt;
use tracing::debug;

use crate::{
    diagnostics::{Diagnostic, ErrorKind},
    environment::Environment,
    lexer::{is_identifier, parse_integer},
};

/// Executes `name = value` against `env`.
///
/// The statement is split on its first `=`; anything after a second `=`
/// stays part of the right-hand side. The store is written only once the
/// right-hand side resolves.
pub fn assign(statement: &str, env: &mut Environment) -> Result<(), Diagnostic> {
    let (target, source) = statement.split_once('=').ok_or_else(|| {
        Diagnostic::new(ErrorKind::InvalidAssignment).with_note("statement has no `=`")
    })?;
    let (target, source) = (target.trim(), source.trim());

    if !is_identifier(target) {
        return Err(Diagnostic::new(ErrorKind::InvalidIdentifier)
            .with_note(format!("`{target}` is not a valid name")));
    }
    let value = resolve(source, env)?;
    debug!(name = target, %value, "assigned");
    env.set(target, value);
    Ok(())
}

fn resolve(source: &str, env: &Environment) -> Result<BigInt, Diagnostic> {
    if let Some(value) = parse_integer(source) {
        return Ok(value);
    }
    if let Some(value) = env.get(source) {
        return Ok(value.clone());
    }
    let kind = if is_identifier(source) {
        ErrorKind::UnknownVariable
    } else {
        ErrorKind::InvalidAssignment
    };
    Err(Diagnostic::new(kind).with_note(format!("cannot assign `{source}`")))
}
