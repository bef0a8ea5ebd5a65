use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::LayoutOverrides;
use crate::packer::WrapIndentStyle;

/// Tailwind Class Formatter CLI - Groups, orders and wraps Tailwind classes in markup files
#[derive(Parser, Debug)]
#[command(name = "tailwind-formatter-cli")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Format class attributes in files
    Format(FormatArgs),
    /// Format a document read from stdin and write it to stdout
    Pipe(PipeArgs),
    /// Format a single class list and print the attribute value
    Pack(PackArgs),
}

/// Layout flags shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Maximum class line width (0 disables wrapping)
    #[arg(
        short = 'w',
        long = "max-line-width",
        value_name = "COLUMNS",
        help = "Maximum width of a class line, indentation included (0 disables wrapping)"
    )]
    pub max_line_width: Option<usize>,

    /// Indentation of wrapped class lines
    #[arg(
        long = "wrap-indent",
        value_enum,
        value_name = "STYLE",
        help = "Indentation of wrapped class lines"
    )]
    pub wrap_indent: Option<WrapIndentStyle>,

    /// Keep the closing quote after the last class
    #[arg(
        long = "close-quote-same-line",
        default_value_t = false,
        help = "Keep the closing quote on the line of the last class"
    )]
    pub close_quote_same_line: bool,
}

impl LayoutArgs {
    pub fn overrides(&self) -> LayoutOverrides {
        LayoutOverrides {
            max_line_width: self.max_line_width,
            wrap_indent_style: self.wrap_indent,
            close_quote_same_line: self.close_quote_same_line,
        }
    }
}

/// Arguments for the format command
#[derive(Parser, Debug, Clone)]
pub struct FormatArgs {
    /// Input file patterns (glob patterns supported)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATTERN",
        num_args = 1..,
        help = "Input file patterns to format (defaults to the configured include patterns)"
    )]
    pub input: Vec<String>,

    /// Exclude patterns (glob patterns to exclude)
    #[arg(
        short = 'e',
        long = "exclude",
        value_name = "PATTERN",
        num_args = 0..,
        help = "Patterns to exclude from formatting"
    )]
    pub exclude: Vec<String>,

    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (YAML or JSON format)"
    )]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Report files that would change without writing them
    #[arg(
        long = "check",
        default_value_t = false,
        help = "Exit with an error if any file would be reformatted; write nothing"
    )]
    pub check: bool,

    /// Dry run (don't write files)
    #[arg(
        long = "dry-run",
        default_value_t = false,
        help = "Format files but don't write them back"
    )]
    pub dry_run: bool,

    /// JSON report path
    #[arg(
        short = 'r',
        long = "report",
        value_name = "PATH",
        help = "Path where a JSON report of the run will be written"
    )]
    pub report: Option<PathBuf>,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,

    /// Number of parallel threads to use
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "NUM",
        help = "Number of parallel threads to use (defaults to number of CPU cores)"
    )]
    pub jobs: Option<usize>,
}

/// Arguments for the pipe command
#[derive(Parser, Debug, Clone)]
pub struct PipeArgs {
    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (YAML or JSON format)"
    )]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Arguments for the pack command
#[derive(Parser, Debug, Clone)]
pub struct PackArgs {
    /// Class list to format
    #[arg(value_name = "CLASSES")]
    pub classes: String,

    /// Indentation of the tag line in spaces
    #[arg(
        long = "indent",
        value_name = "SPACES",
        default_value_t = 0,
        help = "Indentation of the tag line, in spaces"
    )]
    pub indent: usize,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

impl FormatArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.check && self.dry_run {
            return Err("--check and --dry-run cannot be combined".to_string());
        }

        if let Some(jobs) = self.jobs {
            if jobs == 0 {
                return Err("Number of jobs must be at least 1".to_string());
            }
        }

        if let Some(report) = &self.report {
            if report.as_os_str().is_empty() {
                return Err("Report path must not be empty".to_string());
            }
        }

        Ok(())
    }

    /// Files are only read, never written
    pub fn is_read_only(&self) -> bool {
        self.check || self.dry_run
    }
}
