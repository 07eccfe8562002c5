//! Structured result of one simulated run.

use miru_types::OutputKind;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// At least one line was produced.
    Output,
    /// An entry point exists but no line was produced.
    NoOutput,
    /// No line was produced and there is no entry point.
    NoEntryPoint,
}

/// An output call whose argument could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedCall {
    pub kind: OutputKind,
    pub raw_expression: String,
    /// 1-based position of the call in the generated text.
    pub line: u32,
    pub column: u32,
    pub reason: String,
}

/// Everything a caller may want from one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Text to display: the joined lines or a sentinel.
    pub output: String,
    pub status: RunStatus,
    /// Lines in document order, before joining.
    pub lines: Vec<String>,
    /// Unresolvable calls, whatever the policy.
    pub dropped: Vec<DroppedCall>,
    /// Hex SHA-256 of `output`.
    pub output_hash: String,
}

impl RunReport {
    pub(crate) fn new(
        output: String,
        status: RunStatus,
        lines: Vec<String>,
        dropped: Vec<DroppedCall>,
    ) -> Self {
        let output_hash = hash_output(&output);
        Self {
            output,
            status,
            lines,
            dropped,
            output_hash,
        }
    }

    /// Whether any call was unresolvable.
    pub fn is_lossy(&self) -> bool {
        !self.dropped.is_empty()
    }
}

/// Hex-encoded SHA-256 of an output string.
pub fn hash_output(output: &str) -> String {
    Sha256::digest(output.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
