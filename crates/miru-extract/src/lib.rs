//! Miru output extractor: finds the `printf` calls in generated C text.
//!
//! Three call shapes are recognized, one per format specifier:
//!
//! ```text
//! printf("%d\n", <expr>)   → OutputKind::Integer
//! printf("%f\n", <expr>)   → OutputKind::Float
//! printf("%s\n", "<text>") → OutputKind::Text
//! ```
//!
//! Each shape is matched independently and the results are merged back into
//! document order. The extractor is tolerant: anything that does not match a
//! shape exactly is skipped, and it never fails.

pub mod extractor;

pub use extractor::{extract, Extractor};
