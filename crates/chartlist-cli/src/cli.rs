//! CLI argument definitions for the chartlist viewer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "chartlist",
    version,
    about = "List and export the records selected on a chart",
    long_about = "List the entities or links selected on a chart as a table.\n\n\
                  Reads a chart snapshot (schema plus selection) as JSON, applies the\n\
                  requested mode, item type filter and sort, and prints or exports the rows."
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

    /// Include record labels and property values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the selected records as a table.
    Show(ListArgs),

    /// List the item types present in the selection.
    Types(TypesArgs),

    /// Write the selected rows as tab-separated text.
    Export(ExportArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Chart snapshot JSON file.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// List entities or links.
    #[arg(long = "mode", value_enum, default_value = "entity")]
    pub mode: ModeArg,

    /// Only list records of this item type; adds its property columns.
    #[arg(long = "type", value_name = "ITEM_TYPE")]
    pub item_type: Option<String>,

    /// Column key to sort by (for example `label` or a property id).
    #[arg(long = "sort", value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort in descending order.
    #[arg(long = "descending", requires = "sort")]
    pub descending: bool,

    /// Do not wrap values in Unicode directional isolates.
    #[arg(long = "no-bidi-isolation")]
    pub no_bidi_isolation: bool,
}

#[derive(Args)]
pub struct TypesArgs {
    /// Chart snapshot JSON file.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// List entity types or link types.
    #[arg(long = "mode", value_enum, default_value = "entity")]
    pub mode: ModeArg,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Export only these record ids. Given without ids, nothing is selected
    /// and the export is refused.
    #[arg(long = "select", value_name = "ID", num_args = 0.., value_delimiter = ',')]
    pub select: Option<Vec<String>>,

    /// Write to this file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    #[value(alias = "entities")]
    Entity,
    #[value(alias = "links")]
    Link,
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
