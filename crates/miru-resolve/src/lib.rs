//! Miru expression resolver.
//!
//! Turns the argument of one output call into a printable [`Value`] without
//! running the generated program. The accepted grammar is deliberately small:
//!
//! 1. integer literal, optionally negated: `42`, `-7`
//! 2. float literal: `3.500000`
//! 3. one binary operation on two unsigned integer literals: `7 / 2`
//! 4. a bare identifier declared elsewhere as `int name = <1–3>;`
//!
//! Anything else is a [`ResolveError`].
//!
//! [`Value`]: miru_types::Value
//! [`ResolveError`]: miru_types::ResolveError

pub mod arith;
pub mod binding;
pub mod resolver;

pub use miru_types::{ResolveError, ResolveResult};
pub use resolver::{resolve, resolve_literal, Resolver};
