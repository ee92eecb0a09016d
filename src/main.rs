use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

use incgraph::core::{normalize_path, IncludeAnalyzer};
use incgraph::formatters::{
    DotFormatter, GraphFormatter, HtmlFormatter, JsonFormatter, MermaidFormatter,
};
use incgraph::telemetry::{self, LogFormat};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "incgraph",
    version,
    about = "Render the #include graph of a C/C++ source file"
)]
struct Cli {
    /// Source file (or directory of sources) to analyze
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Write the graph here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Mermaid)]
    format: OutputFormat,

    /// Directory that rendered paths are shown relative to
    #[arg(short, long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Leave angle-bracket includes out of the diagram
    #[arg(long)]
    no_system: bool,

    /// Log filter, e.g. `warn` or `incgraph=debug`
    #[arg(long, value_name = "FILTER", env = "INCGRAPH_LOG", default_value = "warn")]
    log_level: String,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogStyle::Compact)]
    log_format: LogStyle,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Mermaid,
    Html,
    Json,
    Dot,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum LogStyle {
    Compact,
    Json,
}

impl From<LogStyle> for LogFormat {
    fn from(style: LogStyle) -> Self {
        match style {
            LogStyle::Compact => LogFormat::Compact,
            LogStyle::Json => LogFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::initialise(&cli.log_level, cli.log_format.into())?;
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        input,
        output,
        format,
        base_dir,
        no_system,
        ..
    } = cli;

    let analyzer = IncludeAnalyzer::new();
    let mut analysis = analyzer.analyze(&input)?;
    if let Some(base_dir) = base_dir {
        analysis.base_dir = normalize_path(&base_dir);
    }

    let formatter: Box<dyn GraphFormatter> = match format {
        OutputFormat::Mermaid => Box::new(MermaidFormatter::new().with_system_includes(!no_system)),
        OutputFormat::Html => Box::new(HtmlFormatter::new().with_system_includes(!no_system)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Dot => Box::new(DotFormatter::new()),
    };

    match output {
        Some(path) => formatter.format_to_file(&analysis, &path)?,
        None => {
            let rendered = formatter.format(&analysis)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
