//! Error types for expression resolution and configuration loading.

use thiserror::Error;

/// Why an output expression could not be turned into a printable value.
///
/// None of these are fatal: the engine treats every variant as
/// "unresolvable" for the one call that produced it and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The expression was empty after trimming.
    #[error("empty expression")]
    Empty,

    /// The expression is outside the supported grammar (multi-operator,
    /// parenthesized, function call, string concatenation, ...).
    #[error("unsupported expression: {0}")]
    Unsupported(String),

    /// An integer literal does not fit in 64 bits.
    #[error("integer literal out of range: {0}")]
    IntegerOutOfRange(String),

    /// A float literal failed to parse.
    #[error("invalid float literal: {0}")]
    InvalidFloat(String),

    /// `/` or `%` with a zero right operand.
    #[error("division by zero: {0}")]
    DivisionByZero(String),

    /// Arithmetic result does not fit in 64 bits.
    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    /// No `int <name> = ...;` declaration with a numeric initializer exists.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    /// The variable's initializer is itself not resolvable without a
    /// further lookup.
    #[error("initializer of `{name}` is not a literal expression: {initializer}")]
    NonLiteralInitializer { name: String, initializer: String },
}

/// Resolver result type alias.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors loading an [`crate::EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON or has the wrong shape.
    #[error("invalid engine config: {0}")]
    Json(#[from] serde_json::Error),

    /// The entry-point marker is empty, which would make every text look
    /// like it has a `main`.
    #[error("entry_point_marker must not be empty")]
    EmptyEntryPointMarker,
}
