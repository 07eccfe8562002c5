//! Shared types for the Miru output simulator.
//!
//! This crate defines the output-call model, printable values, source spans,
//! error types and engine configuration used across the extractor, resolver
//! and engine crates.

mod call;
mod config;
mod error;
mod span;
mod value;

pub use call::{OutputCall, OutputKind};
pub use config::{
    EngineConfig, UnresolvedPolicy, DEFAULT_ENTRY_POINT_MARKER, NO_ENTRY_POINT_SENTINEL,
    NO_OUTPUT_SENTINEL,
};
pub use error::{ConfigError, ResolveError, ResolveResult};
pub use span::{SourceFile, Span};
pub use value::Value;
