//! CLI argument definitions
//!
//! All Clap derive structs for command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::schema::MissingCategory;
use crate::document::DEFAULT_ROW_SELECTOR;
use crate::observability::LogFormat;

/// Input path meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

// ============================================================================
// Root CLI
// ============================================================================

/// Annotates summary tables in rendered HTML with competency category labels.
#[derive(Parser, Debug)]
#[command(name = "competency-annotator", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(
        long,
        default_value = "auto",
        global = true,
        env = "COMPETENCY_ANNOTATOR_COLOR"
    )]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Annotate an HTML document and write the result.
    Annotate(AnnotateArgs),

    /// Show what each matched row would receive, without writing HTML.
    Preview(PreviewArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Annotation Commands
// ============================================================================

/// Options shared by every command that runs an annotation pass.
#[derive(Args, Debug)]
pub struct AnnotationOptions {
    /// Competency data file (.yaml, .yml, .json, or .js).
    #[arg(short, long, env = "COMPETENCY_ANNOTATOR_DATA")]
    pub data: PathBuf,

    /// CSS selector for the rows to annotate.
    #[arg(
        long,
        default_value = DEFAULT_ROW_SELECTOR,
        env = "COMPETENCY_ANNOTATOR_SELECTOR"
    )]
    pub selector: String,

    /// What to render for a code with no category label.
    #[arg(long, default_value = "empty")]
    pub missing_category: MissingCategory,

    /// HTML document to annotate (`-` for stdin).
    #[arg(default_value = STDIN_PATH)]
    pub input: PathBuf,
}

/// Arguments for `annotate`.
#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Annotation options.
    #[command(flatten)]
    pub options: AnnotationOptions,

    /// Write the annotated document here instead of stdout.
    #[arg(short, long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input file with the annotated document.
    #[arg(long)]
    pub in_place: bool,
}

/// Arguments for `preview`.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Annotation options.
    #[command(flatten)]
    pub options: AnnotationOptions,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
