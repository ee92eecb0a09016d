//! # incgraph
//!
//! Follows the local `#include` directives of a C/C++ file and renders the
//! resulting file-level dependency graph.
//!
//! ## Pipeline
//!
//! - **Resolve**: a depth-first walk from the start file. Quoted includes are
//!   resolved next to the including file and followed; angle-bracket includes
//!   are recorded but never opened.
//! - **Render**: the dependency map becomes a mermaid `graph TD` block, with
//!   paths shown relative to a base directory and standard headers collapsed
//!   to their bare name.
//!
//! ## Output Formats
//!
//! Mermaid, a standalone HTML page, JSON and Graphviz DOT.

pub mod core;
pub mod error;
pub mod formatters;
pub mod parsers;
pub mod telemetry;

pub use crate::core::{Analysis, DependencyMap, IncludeAnalyzer, IncludeResolver};
pub use crate::error::AnalyzeError;
pub use crate::formatters::render;
