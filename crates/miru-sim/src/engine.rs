//! Run orchestration: extraction, resolution, policy and fallback.

use miru_extract::Extractor;
use miru_resolve::Resolver;
use miru_types::{EngineConfig, OutputCall, OutputKind, ResolveError, UnresolvedPolicy, Value};

use crate::report::{DroppedCall, RunReport, RunStatus};

/// Simulates runs of generated text under a fixed configuration.
///
/// Holds no per-run state, so one value can serve any number of runs, from
/// any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: EngineConfig,
}

impl Simulator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Simulate one run of `text`. Never fails.
    pub fn run(&self, text: &str) -> RunReport {
        let extractor = Extractor::new(text);
        let resolver = Resolver::new(text);
        let calls = extractor.extract();

        let mut lines = Vec::with_capacity(calls.len());
        let mut dropped = Vec::new();

        for call in &calls {
            match render(&resolver, call) {
                Ok(value) => {
                    tracing::trace!(
                        kind = %call.kind,
                        value_type = value.type_name(),
                        offset = call.source_order,
                        "rendered output call"
                    );
                    lines.push(value.to_string());
                }
                Err(err) => {
                    let (line, column) = extractor.source().line_col(call.source_order);
                    tracing::debug!(
                        kind = %call.kind,
                        expr = %call.raw_expression,
                        line,
                        column,
                        reason = %err,
                        "unresolvable output call"
                    );
                    if let UnresolvedPolicy::Marker { text } = &self.config.unresolved {
                        lines.push(text.clone());
                    }
                    dropped.push(DroppedCall {
                        kind: call.kind,
                        raw_expression: call.raw_expression.clone(),
                        line,
                        column,
                        reason: err.to_string(),
                    });
                }
            }
        }

        let (output, status) = if lines.is_empty() {
            if text.contains(self.config.entry_point_marker.as_str()) {
                (self.config.no_output_sentinel.clone(), RunStatus::NoOutput)
            } else {
                (
                    self.config.no_entry_point_sentinel.clone(),
                    RunStatus::NoEntryPoint,
                )
            }
        } else {
            (lines.join("\n"), RunStatus::Output)
        };

        tracing::debug!(
            calls = calls.len(),
            lines = lines.len(),
            dropped = dropped.len(),
            ?status,
            "simulated run"
        );

        RunReport::new(output, status, lines, dropped)
    }
}

/// Value of one call: text literals are echoed, everything else goes
/// through the resolver.
fn render(resolver: &Resolver<'_>, call: &OutputCall) -> Result<Value, ResolveError> {
    match call.kind {
        OutputKind::Text => call
            .literal_text()
            .map(|text| Value::Text(text.to_string()))
            .ok_or_else(|| ResolveError::Unsupported(call.raw_expression.clone())),
        OutputKind::Integer | OutputKind::Float => resolver.resolve(&call.raw_expression),
    }
}

/// Simulate `text` with the default configuration and return what the
/// playground displays.
pub fn simulate(text: &str) -> String {
    Simulator::default().run(text).output
}

/// Simulate `text` with `config` and return the full report.
pub fn simulate_with(text: &str, config: &EngineConfig) -> RunReport {
    Simulator::new(config.clone()).run(text)
}
