//! Command-line argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "matterkit",
    version,
    about = "Extract and write front matter in text documents",
    long_about = "matterkit splits documents into their front matter data and content, \
                  detects inline language tags and excerpts, and writes merged data back \
                  to files atomically."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse files and print their data, content and excerpt
    Parse(ParseArgs),
    /// Report whether files start with front matter
    Test(TestArgs),
    /// Print the inline language tag of each file
    Language(LanguageArgs),
    /// Merge values into a file's front matter and write it back
    Stringify(StringifyArgs),
}

/// Options shared by commands that extract front matter
#[derive(Args, Debug, Clone, Default)]
pub struct MatterOptions {
    /// Language of the front matter, overriding inline tags
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Language used when no inline tag is present
    #[arg(long, value_name = "LANG")]
    pub default_language: Option<String>,

    /// Delimiter used to open and close the front matter
    #[arg(long, value_name = "DELIM", conflicts_with_all = ["open", "close"])]
    pub delimiter: Option<String>,

    /// Opening delimiter
    #[arg(long, value_name = "DELIM", requires = "close")]
    pub open: Option<String>,

    /// Closing delimiter
    #[arg(long, value_name = "DELIM", requires = "open")]
    pub close: Option<String>,
}

/// Arguments for the parse command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Files or directories to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub matter: MatterOptions,

    /// Extract an excerpt, split at the opening delimiter
    #[arg(long)]
    pub excerpt: bool,

    /// Separator that ends the excerpt
    #[arg(long, value_name = "SEP")]
    pub excerpt_separator: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

/// Arguments for the test command
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Files or directories to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub matter: MatterOptions,
}

/// Arguments for the language command
#[derive(Args, Debug)]
pub struct LanguageArgs {
    /// Files or directories to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub matter: MatterOptions,
}

/// Arguments for the stringify command
#[derive(Args, Debug)]
pub struct StringifyArgs {
    /// File to update
    pub file: PathBuf,

    /// Values to merge into the front matter
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    #[command(flatten)]
    pub matter: MatterOptions,

    /// Preview changes without modifying the file (show diff)
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result instead of writing the file
    #[arg(long, conflicts_with = "dry_run")]
    pub stdout: bool,
}

/// Output formats for parsed documents
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}
