//! CLI argument definitions for the dataset profiler.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "eda-profiler",
    version,
    about = "Exploratory profiling of tabular census datasets",
    long_about = "Profile a CSV dataset before building a classifier.\n\n\
                  Reports shape, per-column distributions, target class balance,\n\
                  duplicate rows and redundant column pairs."
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
    /// Build the full profile report for a dataset.
    Profile(ProfileArgs),

    /// Count the distinct values of one column.
    Counts(CountsArgs),

    /// Cross-tabulate two columns and check them for redundancy.
    Crosstab(CrosstabArgs),

    /// Summary statistics of one numerical column.
    Stats(StatsArgs),

    /// Keep only some columns and write them to a CSV file.
    Project(ProjectArgs),

    /// Print the column partition in effect.
    Schema(SchemaArgs),
}

/// How to read the source.
#[derive(Args)]
pub struct LoadArgs {
    /// TOML config file with source, missing markers, timeout and schema.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Field value read as missing (repeatable; replaces the config's list).
    #[arg(long = "missing-value", value_name = "MARKER")]
    pub missing_values: Vec<String>,

    /// Request timeout for URL sources, in seconds.
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

#[derive(Args)]
pub struct ProfileArgs {
    /// Local path or http(s) URL of the CSV (default: the config's source,
    /// then the public census extract).
    #[arg(value_name = "SOURCE")]
    pub source: Option<String>,

    #[command(flatten)]
    pub load: LoadArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Also write the JSON report to this file (with `--format json`, instead of stdout).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CountsArgs {
    /// Local path or http(s) URL of the CSV.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    #[command(flatten)]
    pub load: LoadArgs,

    /// Column to count.
    #[arg(long = "column", value_name = "NAME")]
    pub column: String,
}

#[derive(Args)]
pub struct CrosstabArgs {
    /// Local path or http(s) URL of the CSV.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    #[command(flatten)]
    pub load: LoadArgs,

    /// Column whose values label the rows.
    #[arg(value_name = "COLUMN_A")]
    pub column_a: String,

    /// Column whose values label the table columns.
    #[arg(value_name = "COLUMN_B")]
    pub column_b: String,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Local path or http(s) URL of the CSV.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    #[command(flatten)]
    pub load: LoadArgs,

    #[arg(long = "column", value_name = "NAME")]
    pub column: String,
}

#[derive(Args)]
pub struct ProjectArgs {
    /// Local path or http(s) URL of the CSV.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    #[command(flatten)]
    pub load: LoadArgs,

    /// Columns to keep, in output order.
    #[arg(long = "columns", value_name = "NAMES", value_delimiter = ',', required = true)]
    pub columns: Vec<String>,

    /// Destination CSV file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct SchemaArgs {
    /// Show the schema from this config file instead of the census schema.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
