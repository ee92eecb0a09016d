use anyhow::Result;

use super::{GraphFormatter, MermaidFormatter};
use crate::core::Analysis;

pub const MERMAID_CDN: &str = "https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.esm.min.mjs";
pub const PAGE_TITLE: &str = "Dependencies Graph";

/// Standalone page that renders the mermaid graph in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter {
    mermaid: MermaidFormatter,
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_system_includes(mut self, include: bool) -> Self {
        self.mermaid = self.mermaid.with_system_includes(include);
        self
    }

    pub fn wrap(&self, diagram: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{PAGE_TITLE}</title>
    <script type="module">
        import mermaid from '{MERMAID_CDN}';
        mermaid.initialize({{ startOnLoad: true }});
    </script>
</head>
<body>
    <div class="mermaid">
{}
    </div>
</body>
</html>
"#,
            escape_html(diagram)
        )
    }
}

impl GraphFormatter for HtmlFormatter {
    fn format(&self, analysis: &Analysis) -> Result<String> {
        let diagram = self.mermaid.format(analysis)?;
        Ok(self.wrap(&diagram))
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
