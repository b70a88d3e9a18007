//! CLI argument definitions for the institution timeline form.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use edupaz_model::{EventField, GeneralField};
use edupaz_cli::store::DEFAULT_FORM_PATH;

#[derive(Parser)]
#[command(
    name = "edupaz",
    version,
    about = "Institution timeline form - fill in and export to Excel or Word",
    long_about = "Fill in the \"Información general de la Institución\" form and its \
                  school/territory timeline, then export it.\n\n\
                  Supports XLSX (spreadsheet) and DOCX (document) outputs.\n\
                  Name and municipality must be filled in before exporting."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Form file holding the current answers.
    #[arg(long = "form", value_name = "PATH", default_value = DEFAULT_FORM_PATH, global = true)]
    pub form: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a new form with one empty timeline event.
    Init(InitArgs),

    /// Set a general information field (name or municipality).
    Set(SetArgs),

    /// Append an empty timeline event.
    AddEvent,

    /// Remove a timeline event by position.
    RemoveEvent(RemoveEventArgs),

    /// Replace one field of a timeline event.
    UpdateEvent(UpdateEventArgs),

    /// Show the form and the preview table.
    Show,

    /// Check whether the form can be exported.
    Check,

    /// Export the form to XLSX and/or DOCX.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct InitArgs {
    /// Replace an existing form file.
    #[arg(long = "force")]
    pub force: bool,
}

#[derive(Parser)]
pub struct SetArgs {
    /// Field to set: name or municipality.
    #[arg(value_name = "FIELD")]
    pub field: GeneralField,

    /// New text for the field.
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(Parser)]
pub struct RemoveEventArgs {
    /// Zero-based position of the event.
    #[arg(value_name = "INDEX")]
    pub index: usize,
}

#[derive(Parser)]
pub struct UpdateEventArgs {
    /// Zero-based position of the event.
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// Field to replace: period, context, positiveChanges or solidarityActors.
    #[arg(value_name = "FIELD")]
    pub field: EventField,

    /// New text for the field.
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Output format to generate.
    #[arg(long = "format", value_enum, default_value = "both")]
    pub format: ExportFormatArg,

    /// Directory for the exported files (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Xlsx,
    Docx,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
