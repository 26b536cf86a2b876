//! CLI argument definitions for the dossier catalog viewer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dossier",
    version,
    about = "Dossier - browse the investigation catalogs",
    long_about = "Filter, sort, and group the investigation catalogs: the document\n\
                  library, the event timeline, and the affiliations index.\n\
                  Catalogs can also be loaded from CSV files with the same columns."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a catalog through the active filters, sort, and grouping.
    View(ViewArgs),

    /// List a catalog's fields and the values its filter controls offer.
    Fields(FieldsArgs),
}

#[derive(Args)]
pub struct ViewArgs {
    /// Catalog to view.
    #[arg(value_enum)]
    pub catalog: CatalogArg,

    /// Load the catalog from a CSV file instead of the built-in sample.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Free-text search over the catalog's searchable fields.
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Categorical filter, e.g. --filter category=Health. Repeatable;
    /// dimensions combine with AND.
    #[arg(long = "filter", value_name = "DIM=VALUE")]
    pub filters: Vec<String>,

    /// Field to sort by.
    #[arg(long = "sort", value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long = "desc")]
    pub desc: bool,

    /// Layout mode.
    #[arg(long = "mode", value_enum, default_value = "list")]
    pub mode: ModeArg,

    /// Group the result by a category field.
    #[arg(long = "group-by", value_name = "FIELD")]
    pub group_by: Option<String>,

    /// Show the full detail of one record under the table.
    #[arg(long = "expand", value_name = "ID")]
    pub expand: Option<String>,
}

#[derive(Args)]
pub struct FieldsArgs {
    /// Catalog to describe.
    #[arg(value_enum)]
    pub catalog: CatalogArg,

    /// Describe a CSV catalog instead of the built-in sample.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CatalogArg {
    Documents,
    Timeline,
    Affiliations,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    List,
    Grid,
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
