use clap::Parser;

use crate::dependency_report::policies::SummaryOrder;

/// Export the forward dependencies of a file as an XML document and JSON report
#[derive(Parser, Debug)]
#[command(name = "dep-report")]
#[command(version = "0.1.0")]
#[command(
    about = "Export the forward dependencies of a file as an XML document and JSON report",
    long_about = None
)]
pub struct Args {
    /// File to analyze, relative to the project directory
    #[arg(required_unless_present = "describe_tool")]
    pub file: Option<String>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Dependency index file (defaults to <project>/.dep-index.json)
    #[arg(short, long)]
    pub index: Option<String>,

    /// Output file path for the JSON report (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Directory for per-invocation XML documents
    #[arg(long, value_name = "DIR", conflicts_with = "report_path")]
    pub report_dir: Option<String>,

    /// Fixed XML document path shared by all invocations (last writer wins)
    #[arg(long, value_name = "PATH")]
    pub report_path: Option<String>,

    /// Order of files in the text summary: map or sorted
    #[arg(long, value_name = "ORDER")]
    pub summary_order: Option<SummaryOrder>,

    /// Path to a config file (defaults to <project>/dep-report.config.yml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the tool definition as JSON and exit
    #[arg(long)]
    pub describe_tool: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
