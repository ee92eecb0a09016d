use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::{Directed, Graph};
use std::collections::HashMap;
use std::fmt;

use super::dependencies::DependencyMap;
use super::paths::PathDisplay;
use crate::parsers::IncludeKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub label: String,
    /// Whether the file was read and has its own outgoing edges.
    pub resolved: bool,
}

impl fmt::Display for FileNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

pub type IncludeGraph = Graph<FileNode, IncludeKind, Directed>;

/// Builds an [`IncludeGraph`] keyed by display label, so targets that render
/// to the same label share a node.
pub struct GraphBuilder {
    graph: IncludeGraph,
    node_map: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
        }
    }

    pub fn from_dependencies(dependencies: &DependencyMap, display: &PathDisplay) -> Self {
        let mut builder = Self::new();
        for (file, deps) in dependencies {
            let source = builder.add_node(&display.source_label(file));
            builder.graph[source].resolved = true;
            for dep in deps {
                let target = builder.add_node(&display.target_label(&dep.path));
                builder.graph.add_edge(source, target, dep.kind);
            }
        }
        builder
    }

    /// Returns the existing node for `label` or creates an unresolved one.
    pub fn add_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(label) {
            return index;
        }
        let index = self.graph.add_node(FileNode {
            label: label.to_string(),
            resolved: false,
        });
        self.node_map.insert(label.to_string(), index);
        index
    }

    pub fn add_edge(&mut self, source: &str, target: &str, kind: IncludeKind) -> Option<EdgeIndex> {
        let source_idx = self.node_map.get(source)?;
        let target_idx = self.node_map.get(target)?;
        Some(self.graph.add_edge(*source_idx, *target_idx, kind))
    }

    pub fn build(self) -> IncludeGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Labels of nodes that are referenced but were never read as a source file,
/// either because loading failed or because they are system headers.
pub fn dangling_nodes(graph: &IncludeGraph) -> Vec<&str> {
    graph
        .node_indices()
        .filter_map(|idx| graph.node_weight(idx))
        .filter(|node| !node.resolved)
        .map(|node| node.label.as_str())
        .collect()
}
