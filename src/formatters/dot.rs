use anyhow::Result;
use petgraph::dot::{Config, Dot};

use super::GraphFormatter;
use crate::core::{Analysis, IncludeGraph};

/// Graphviz export of the merged include graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_graph(&self, graph: &IncludeGraph) -> String {
        format!("{}", Dot::with_config(graph, &[Config::EdgeNoLabel]))
    }
}

impl GraphFormatter for DotFormatter {
    fn format(&self, analysis: &Analysis) -> Result<String> {
        Ok(self.format_graph(&analysis.graph()))
    }
}
