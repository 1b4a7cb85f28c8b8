use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the richdoc binary.
#[derive(Debug, Parser)]
#[command(
    name = "richdoc",
    version,
    about = "Render rich-text JSON documents to HTML"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "RICHDOC_CONFIG_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath
    )]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render a document tree to an HTML fragment.
    Render(RenderArgs),
    /// Print the heading outline of a document tree as JSON.
    Headings(HeadingsArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    /// Document to read; `-` or no value reads standard input.
    #[arg(value_name = "INPUT", value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Write the result to this file instead of standard output.
    #[arg(long, short = 'o', value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Emit only the HTML fragment, or the full rendered document as JSON.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub overrides: RenderOverrides,
}

#[derive(Debug, Args, Clone)]
pub struct HeadingsArgs {
    /// Document to read; `-` or no value reads standard input.
    #[arg(value_name = "INPUT", value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Nest headings into an outline instead of a flat list.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub outline: bool,

    #[command(flatten)]
    pub overrides: RenderOverrides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Json,
}

#[derive(Debug, Args, Default, Clone)]
pub struct RenderOverrides {
    /// Suffix repeated heading anchors with -2, -3, ...
    #[arg(
        long = "unique-anchors",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub unique_anchors: Option<bool>,

    /// Run the rendered HTML through the allow-list sanitizer.
    #[arg(
        long = "sanitize",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub sanitize: Option<bool>,

    /// Override the reading speed used for reading-time estimates.
    #[arg(long = "words-per-minute", value_name = "COUNT")]
    pub words_per_minute: Option<u32>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}
