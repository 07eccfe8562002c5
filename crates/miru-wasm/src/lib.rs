//! Miru output simulator as a WASM module for the browser playground.
//!
//! The playground compiles Miru source to C elsewhere, then hands the
//! generated C to this module to obtain the text shown in the output panel.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { run, run_report } from 'miru-wasm';
//!
//! await init();
//!
//! const output = run(generatedC);
//! const report = JSON.parse(run_report(generatedC, ""));
//! // { output: "5", status: "output", lines: ["5"], dropped: [], output_hash: "..." }
//! ```

use miru_sim::{RunReport, Simulator};
use miru_types::EngineConfig;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Report plus any problem with the supplied config.
#[derive(Serialize)]
struct ReportEnvelope {
    #[serde(flatten)]
    report: RunReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    config_error: Option<String>,
}

/// Simulate a run of generated C and return the text to display.
///
/// Always returns a string: the printed lines joined by `\n`, or one of the
/// two sentinels when nothing was printed.
#[wasm_bindgen]
pub fn run(generated: &str) -> String {
    miru_sim::simulate(generated)
}

/// Simulate a run and return a JSON `RunReport`.
///
/// `config_json` is an `EngineConfig` document; an empty string means the
/// defaults. An invalid config does not fail the run: the defaults are used
/// and the problem is reported in a `config_error` field.
#[wasm_bindgen]
pub fn run_report(generated: &str, config_json: &str) -> String {
    let envelope = report_envelope(generated, config_json);
    serde_json::to_string(&envelope).unwrap_or_else(|e| {
        format!(
            r#"{{"output":"","status":"no_output","lines":[],"dropped":[],"output_hash":"","config_error":"Serialization error: {}"}}"#,
            e
        )
    })
}

/// Like [`run_report`], but takes and returns JS objects instead of JSON text.
///
/// `config` may be `undefined` or `null` for the defaults.
#[wasm_bindgen(js_name = runReportObject)]
pub fn run_report_object(generated: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let config: EngineConfig = if config.is_undefined() || config.is_null() {
        EngineConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    let report = Simulator::new(config).run(generated);
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Return the simulator version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn report_envelope(generated: &str, config_json: &str) -> ReportEnvelope {
    let (config, config_error) = if config_json.trim().is_empty() {
        (EngineConfig::default(), None)
    } else {
        match EngineConfig::from_json(config_json) {
            Ok(config) => (config, None),
            Err(e) => (EngineConfig::default(), Some(e.to_string())),
        }
    };
    ReportEnvelope {
        report: Simulator::new(config).run(generated),
        config_error,
    }
}
