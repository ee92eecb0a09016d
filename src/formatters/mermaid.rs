use anyhow::Result;
use std::path::Path;

use super::GraphFormatter;
use crate::core::{Analysis, DependencyMap, PathDisplay};

pub const GRAPH_HEADER: &str = "graph TD";

/// Writes a mermaid flowchart with one `source --> target` line per include.
#[derive(Debug, Clone, Copy)]
pub struct MermaidFormatter {
    include_system: bool,
}

impl MermaidFormatter {
    pub fn new() -> Self {
        Self {
            include_system: true,
        }
    }

    /// Whether angle-bracket includes are drawn as edges.
    pub fn with_system_includes(mut self, include: bool) -> Self {
        self.include_system = include;
        self
    }

    pub fn format_dependencies(&self, dependencies: &DependencyMap, base_dir: &Path) -> String {
        let display = PathDisplay::new(base_dir);
        let mut out = String::with_capacity(16 + dependencies.edge_count() * 48);
        out.push_str(GRAPH_HEADER);
        out.push('\n');

        for (file, deps) in dependencies {
            let source = display.source_label(file);
            for dep in deps {
                if !self.include_system && !dep.is_local() {
                    continue;
                }
                let target = display.target_label(&dep.path);
                out.push_str(&format!("  {} --> {}\n", source, target));
            }
        }

        out
    }
}

impl Default for MermaidFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for MermaidFormatter {
    fn format(&self, analysis: &Analysis) -> Result<String> {
        Ok(self.format_dependencies(&analysis.resolution.dependencies, &analysis.base_dir))
    }
}

/// Mermaid text for `dependencies`, with paths under `base_dir` shown
/// relative to it.
pub fn render(dependencies: &DependencyMap, base_dir: &Path) -> String {
    MermaidFormatter::new().format_dependencies(dependencies, base_dir)
}
