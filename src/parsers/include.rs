use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Single-line `#include` matcher. Only the opening delimiter decides the
/// include kind; anything else on the line is ignored.
///
/// U+FEFF counts as whitespace so an include on the first line of a file
/// saved with a byte-order mark still matches.
static INCLUDE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[\s\x{FEFF}]*#include[\s\x{FEFF}]+(["<])(.*?)[">]"#)
        .expect("include pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IncludeKind {
    /// `#include "file.h"`, resolved next to the including file.
    Local,
    /// `#include <file>`, left to the compiler's search paths.
    System,
}

impl fmt::Display for IncludeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncludeKind::Local => f.write_str("local"),
            IncludeKind::System => f.write_str("system"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    pub kind: IncludeKind,
    pub target: String,
    pub line_number: usize,
}

pub fn parse_line(line: &str) -> Option<(IncludeKind, &str)> {
    let captures = INCLUDE_RE.captures(line)?;
    let kind = match captures.get(1)?.as_str() {
        "<" => IncludeKind::System,
        _ => IncludeKind::Local,
    };
    Some((kind, captures.get(2)?.as_str()))
}

/// Collect every include directive in `source`, in source order.
pub fn parse_includes(source: &str) -> Vec<IncludeDirective> {
    source
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            parse_line(line).map(|(kind, target)| IncludeDirective {
                kind,
                target: target.to_string(),
                line_number: idx + 1,
            })
        })
        .collect()
}
