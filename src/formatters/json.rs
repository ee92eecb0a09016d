use anyhow::Result;
use serde::Serialize;

use super::GraphFormatter;
use crate::core::Analysis;

#[derive(Debug, Serialize)]
struct JsonReport {
    base: String,
    roots: Vec<String>,
    files: Vec<JsonFile>,
    failures: Vec<JsonFailure>,
}

#[derive(Debug, Serialize)]
struct JsonFile {
    path: String,
    local: Vec<String>,
    system: Vec<String>,
}

#[derive(Debug, Serialize)]
struct JsonFailure {
    path: String,
    reason: String,
}

/// Machine-readable dump of the dependency map, using the same labels as the
/// diagram.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, analysis: &Analysis) -> Result<String> {
        let display = analysis.display();

        let files = analysis
            .resolution
            .dependencies
            .iter()
            .map(|(file, deps)| {
                let (local, system): (Vec<_>, Vec<_>) = deps.iter().partition(|d| d.is_local());
                JsonFile {
                    path: display.source_label(file),
                    local: local.iter().map(|d| display.target_label(&d.path)).collect(),
                    system: system.iter().map(|d| display.target_label(&d.path)).collect(),
                }
            })
            .collect();

        let report = JsonReport {
            base: display.base().to_string(),
            roots: analysis
                .roots
                .iter()
                .map(|root| display.source_label(root))
                .collect(),
            files,
            failures: analysis
                .resolution
                .failures
                .iter()
                .map(|failure| JsonFailure {
                    path: display.source_label(&failure.path),
                    reason: failure.reason.clone(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}
