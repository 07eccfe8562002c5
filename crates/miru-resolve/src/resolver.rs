//! Expression resolution, tried in priority order.

use std::sync::LazyLock;

use miru_types::{ResolveError, ResolveResult, Value};
use regex::Regex;

use crate::arith::BinOp;
use crate::binding::find_int_binding;

static INT_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("int literal pattern is a valid regex"));

static FLOAT_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+$").expect("float literal pattern is a valid regex")
});

static BINARY_OP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\s*([-+*/%])\s*([0-9]+)$").expect("binary op pattern is a valid regex")
});

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is a valid regex")
});

/// Resolves output expressions against one generated text.
///
/// The text is only consulted for bare identifiers.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'src> {
    text: &'src str,
}

impl<'src> Resolver<'src> {
    pub fn new(text: &'src str) -> Self {
        Self { text }
    }

    /// Resolve `expr`: literal rules first, then a one-level variable lookup.
    pub fn resolve(&self, expr: &str) -> ResolveResult<Value> {
        let expr = expr.trim();
        match resolve_literal(expr) {
            Err(ResolveError::Unsupported(_)) if IDENTIFIER.is_match(expr) => {
                self.resolve_variable(expr)
            }
            other => other,
        }
    }

    /// Look `name` up and resolve its initializer with the literal rules only.
    ///
    /// A variable bound to another variable is never followed.
    fn resolve_variable(&self, name: &str) -> ResolveResult<Value> {
        let Some(binding) = find_int_binding(self.text, name) else {
            tracing::trace!(name, "no integer declaration found");
            return Err(ResolveError::UnboundVariable(name.to_string()));
        };
        tracing::trace!(
            name,
            initializer = binding.initializer.trim(),
            offset = binding.offset,
            "resolving variable"
        );
        resolve_literal(binding.initializer).map_err(|err| match err {
            ResolveError::Unsupported(_) | ResolveError::Empty => {
                ResolveError::NonLiteralInitializer {
                    name: name.to_string(),
                    initializer: binding.initializer.trim().to_string(),
                }
            }
            other => other,
        })
    }
}

/// Resolve `expr` against `text`.
pub fn resolve(expr: &str, text: &str) -> ResolveResult<Value> {
    Resolver::new(text).resolve(expr)
}

/// Resolve `expr` using only the literal and binary-operation rules.
pub fn resolve_literal(expr: &str) -> ResolveResult<Value> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Err(ResolveError::Empty);
    }

    if INT_LITERAL.is_match(expr) {
        return parse_int(expr).map(Value::Int);
    }

    if FLOAT_LITERAL.is_match(expr) {
        return expr
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| ResolveError::InvalidFloat(expr.to_string()));
    }

    if let Some(caps) = BINARY_OP.captures(expr) {
        let (Some(left), Some(op), Some(right)) = (caps.get(1), caps.get(2), caps.get(3)) else {
            return Err(ResolveError::Unsupported(expr.to_string()));
        };
        let op = BinOp::from_symbol(op.as_str())
            .ok_or_else(|| ResolveError::Unsupported(expr.to_string()))?;
        let left = parse_int(left.as_str())?;
        let right = parse_int(right.as_str())?;
        return op.apply(left, right).map(Value::Int);
    }

    Err(ResolveError::Unsupported(expr.to_string()))
}

fn parse_int(digits: &str) -> ResolveResult<i64> {
    digits
        .parse::<i64>()
        .map_err(|_| ResolveError::IntegerOutOfRange(digits.to_string()))
}
