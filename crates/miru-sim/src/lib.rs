//! Miru output simulator: reconstructs a program's printed output from its
//! generated C text.
//!
//! ```text
//! Generated C → Extractor → [OutputCall] → Resolver → lines → output / sentinel
//! ```
//!
//! This is a static, best-effort reconstruction and not an interpreter:
//! only literal arguments, a single binary operation on integer literals and
//! one-level `int` variable lookups are understood. Under the default policy
//! any other argument disappears from the output without a diagnostic; use
//! [`EngineConfig::unresolved`] or the [`RunReport::dropped`] list to make
//! such losses visible.

pub mod engine;
pub mod report;

pub use engine::{simulate, simulate_with, Simulator};
pub use miru_types::{EngineConfig, UnresolvedPolicy, NO_ENTRY_POINT_SENTINEL, NO_OUTPUT_SENTINEL};
pub use report::{DroppedCall, RunReport, RunStatus};
