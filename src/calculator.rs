use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::{
    assignment, ast, converter,
    diagnostics::Diagnostic,
    environment::Environment,
    evaluator, normalizer,
};

/// The calculator core: one variable store and the three entry points the
/// front end routes into.
#[derive(Debug, Default)]
pub struct Calculator {
    env: Environment,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(env: Environment) -> Self {
        Self { env }
    }

    /// Normalizes, converts and evaluates an arithmetic expression.
    pub fn evaluate(&self, expression: &str) -> Result<BigInt, Diagnostic> {
        let normalized = normalizer::normalize(expression);
        debug!(input = expression, %normalized, "evaluating");
        let postfix = converter::to_postfix(&normalized, &self.env)?;
        trace!(postfix = %ast::display_postfix(&postfix));
        evaluator::evaluate(&postfix)
    }

    pub fn assign(&mut self, statement: &str) -> Result<(), Diagnostic> {
        assignment::assign(statement, &mut self.env)
    }

    pub fn lookup(&self, name: &str) -> Option<&BigInt> {
        self.env.get(name)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }
}
