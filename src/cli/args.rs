//! Command line argument parsing for the Javelin CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Javelin - relevance-feedback query expansion
#[derive(Parser, Debug, Clone)]
#[command(name = "javelin")]
#[command(about = "Relevance-feedback query expansion for Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct JavelinArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl JavelinArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Expand a query from relevance feedback
    Expand(ExpandArgs),
}

/// Arguments for the expand command
#[derive(clap::Args, Debug, Clone)]
pub struct ExpandArgs {
    /// The query to expand
    #[arg(short = 'q', long)]
    pub query: String,

    /// File containing relevant documents, one per line
    #[arg(short = 'r', long)]
    pub relevant: PathBuf,

    /// File containing irrelevant documents, one per line
    #[arg(short = 'i', long)]
    pub irrelevant: Option<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expand_command() {
        let args = JavelinArgs::parse_from([
            "javelin", "expand", "--query", "machine learning", "--relevant", "rel.txt",
        ]);

        match &args.command {
            Command::Expand(expand) => {
                assert_eq!(expand.query, "machine learning");
                assert_eq!(expand.relevant, PathBuf::from("rel.txt"));
                assert!(expand.irrelevant.is_none());
            }
        }
        assert_eq!(args.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_verbosity_levels() {
        let args = JavelinArgs::parse_from([
            "javelin", "-v", "-v", "expand", "-q", "x", "-r", "rel.txt",
        ]);
        assert_eq!(args.verbosity(), 2);

        let quiet = JavelinArgs::parse_from([
            "javelin", "--quiet", "expand", "-q", "x", "-r", "rel.txt",
        ]);
        assert_eq!(quiet.verbosity(), 0);
    }

    #[test]
    fn test_json_format_flag() {
        let args = JavelinArgs::parse_from([
            "javelin", "-f", "json", "expand", "-q", "x", "-r", "rel.txt",
        ]);
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
