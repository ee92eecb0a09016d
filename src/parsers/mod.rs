pub mod include;

pub use include::{parse_includes, parse_line, IncludeDirective, IncludeKind};
