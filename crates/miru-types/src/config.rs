//! Engine configuration.
//!
//! Every field has a default matching the playground's historical behavior,
//! so an empty JSON object (or no config at all) reproduces it exactly.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Marker whose presence means the generated text has an entry point.
pub const DEFAULT_ENTRY_POINT_MARKER: &str = "int main";

/// Returned when an entry point exists but nothing was printed.
pub const NO_OUTPUT_SENTINEL: &str = "(Program executed but produced no output)";

/// Returned when nothing was printed and there is no entry point.
pub const NO_ENTRY_POINT_SENTINEL: &str = "(No main function generated)";

/// What to emit for an output call whose argument could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum UnresolvedPolicy {
    /// Omit the call from the output entirely.
    #[default]
    Drop,
    /// Emit `text` as the call's output line.
    Marker { text: String },
}

/// Tunables for one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EngineConfig {
    pub unresolved: UnresolvedPolicy,
    pub entry_point_marker: String,
    pub no_output_sentinel: String,
    pub no_entry_point_sentinel: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            unresolved: UnresolvedPolicy::Drop,
            entry_point_marker: DEFAULT_ENTRY_POINT_MARKER.to_string(),
            no_output_sentinel: NO_OUTPUT_SENTINEL.to_string(),
            no_entry_point_sentinel: NO_ENTRY_POINT_SENTINEL.to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder-style policy override.
    pub fn with_unresolved(mut self, policy: UnresolvedPolicy) -> Self {
        self.unresolved = policy;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.entry_point_marker.is_empty() {
            return Err(ConfigError::EmptyEntryPointMarker);
        }
        Ok(())
    }
}
