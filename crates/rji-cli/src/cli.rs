//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use rji_model::DatasetKind;
use rji_model::columns::participant;

#[derive(Parser)]
#[command(
    name = "rji",
    version,
    about = "RJI registrations - cross-check minors against their guardians",
    long_about = "Maintain the RJI registration datasets and rebuild the reconciliation\n\
                  dataset that cross-checks every minor against the companion they\n\
                  declared as guardian (registration, consent file, declared list)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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

    /// Allow national IDs and names to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Configuration file (default: <DATA_DIR>/rji.toml).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create any missing dataset files with their headers.
    Init(DataDirArgs),

    /// Rebuild the reconciliation dataset from participants and companions.
    Reconcile(ReconcileArgs),

    /// Summarize the stored reconciliation dataset without rebuilding it.
    Show(ShowArgs),

    /// Validate and store one registration.
    Append(AppendArgs),

    /// Record the link of an uploaded document on a participant.
    SetLink(SetLinkArgs),

    /// List the columns of a dataset.
    Columns(ColumnsArgs),
}

#[derive(Args)]
pub struct DataDirArgs {
    /// Directory holding the dataset CSV files.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,
}

#[derive(Args)]
pub struct ReconcileArgs {
    #[command(flatten)]
    pub location: DataDirArgs,

    /// Print every row that carries observations.
    #[arg(long = "details")]
    pub details: bool,

    /// Print the reconciliation rows as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub location: DataDirArgs,

    /// Print every row that carries observations.
    #[arg(long = "details")]
    pub details: bool,
}

#[derive(Args)]
pub struct AppendArgs {
    #[command(flatten)]
    pub location: DataDirArgs,

    /// Kind of registration being stored.
    #[arg(value_enum, value_name = "KIND")]
    pub kind: RegistrationArg,

    /// Column value as column=value (repeatable).
    #[arg(long = "field", short = 'f', value_name = "COLUMN=VALUE")]
    pub fields: Vec<String>,

    /// Rebuild the reconciliation dataset after storing.
    #[arg(long = "reconcile")]
    pub reconcile: bool,
}

#[derive(Args)]
pub struct SetLinkArgs {
    #[command(flatten)]
    pub location: DataDirArgs,

    /// Participant document to update (whitespace is ignored).
    #[arg(long = "document", value_name = "ID")]
    pub document: String,

    /// Link to store.
    #[arg(long = "link", value_name = "URL")]
    pub link: String,

    /// Column receiving the link.
    #[arg(long = "column", default_value = participant::DOCUMENT_FILE_URL)]
    pub column: String,
}

#[derive(Args)]
pub struct ColumnsArgs {
    /// Dataset to list (all when omitted).
    #[arg(value_enum)]
    pub dataset: Option<DatasetArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RegistrationArg {
    Participant,
    Companion,
}

impl RegistrationArg {
    pub fn dataset_kind(self) -> DatasetKind {
        match self {
            RegistrationArg::Participant => DatasetKind::Participants,
            RegistrationArg::Companion => DatasetKind::Companions,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DatasetArg {
    Participants,
    Companions,
    Reconciliation,
}

impl DatasetArg {
    pub fn dataset_kind(self) -> DatasetKind {
        match self {
            DatasetArg::Participants => DatasetKind::Participants,
            DatasetArg::Companions => DatasetKind::Companions,
            DatasetArg::Reconciliation => DatasetKind::Reconciliation,
        }
    }
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
