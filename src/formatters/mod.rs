//! Output formats for an include analysis.

pub mod dot;
pub mod html;
pub mod json;
pub mod mermaid;

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::Analysis;
use crate::error::AnalyzeError;

pub use dot::DotFormatter;
pub use html::HtmlFormatter;
pub use json::JsonFormatter;
pub use mermaid::{render, MermaidFormatter};

pub trait GraphFormatter {
    fn format(&self, analysis: &Analysis) -> Result<String>;

    fn format_to_file(&self, analysis: &Analysis, output_path: &Path) -> Result<()> {
        let content = self.format(analysis)?;
        fs::write(output_path, content).map_err(|source| AnalyzeError::Write {
            path: output_path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}
