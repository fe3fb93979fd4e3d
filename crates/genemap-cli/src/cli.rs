//! CLI argument definitions for the gene identifier converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use genemap_model::{DEFAULT_PREVIEW_ROWS, Delimiter, Direction, Species};
use genemap_reference::DedupPolicy;

#[derive(Parser)]
#[command(
    name = "genemap",
    version,
    about = "Convert between Ensembl gene IDs and gene symbols",
    long_about = "Convert one column of a CSV/TSV file between Ensembl gene IDs and gene symbols.\n\n\
                  Bundled reference tables: human (hg38, GENCODE v43) and mouse (mm10, GENCODE v25).\n\
                  Set GENEMAP_REFERENCE_DIR to use a different table directory."
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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one column of a CSV/TSV file and write `<name>_converted.<ext>`.
    Convert(ConvertArgs),

    /// Show the headers and first rows of a CSV/TSV file.
    Preview(PreviewArgs),

    /// List supported species and their reference tables.
    Species(SpeciesArgs),
}

#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("target")
        .required(true)
        .args(["column", "column_index"])
))]
pub struct ConvertArgs {
    /// Input CSV (.csv) or TSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Species whose reference table is used.
    #[arg(long, short = 's', value_enum)]
    pub species: SpeciesArg,

    /// Header of the column to convert.
    #[arg(long, short = 'c', value_name = "NAME")]
    pub column: Option<String>,

    /// Zero-based position of the column to convert.
    #[arg(long = "column-index", value_name = "N")]
    pub column_index: Option<usize>,

    /// Conversion direction.
    #[arg(long, short = 'd', value_enum, default_value = "id-to-symbol")]
    pub direction: DirectionArg,

    /// Directory for the output file (default: next to the input).
    #[arg(long = "output-dir", short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write this marker for values with no match instead of keeping them.
    #[arg(long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Keep the source column and add the converted values as a new last column.
    #[arg(long)]
    pub append: bool,

    /// Drop the `.N` version from Ensembl IDs produced by symbol-to-id.
    #[arg(long = "strip-version")]
    pub strip_version: bool,

    /// Retry unmatched Ensembl IDs without their version suffix.
    #[arg(long = "match-unversioned")]
    pub match_unversioned: bool,

    /// Replace the output file if it already exists.
    #[arg(long)]
    pub overwrite: bool,

    /// Input delimiter (default: comma for .csv, tab otherwise).
    #[arg(long, value_enum)]
    pub delimiter: Option<DelimiterArg>,

    /// How duplicate keys in the reference table are resolved.
    #[arg(long, value_enum, default_value = "first")]
    pub dedup: DedupArg,

    /// TOML file with conversion options; flags override its values.
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Directory holding `<species>_table.tsv` reference files.
    #[arg(long = "reference-dir", value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,

    /// Print the summary as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// Input CSV (.csv) or TSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of data rows to show.
    #[arg(long, short = 'n', default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub rows: usize,

    /// Input delimiter (default: comma for .csv, tab otherwise).
    #[arg(long, value_enum)]
    pub delimiter: Option<DelimiterArg>,
}

#[derive(Args)]
pub struct SpeciesArgs {
    /// Directory holding `<species>_table.tsv` reference files.
    #[arg(long = "reference-dir", value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SpeciesArg {
    #[value(aliases = ["human", "hg38_v43"])]
    Hg38,
    #[value(aliases = ["mouse", "mm10_v25"])]
    Mm10,
}

impl From<SpeciesArg> for Species {
    fn from(value: SpeciesArg) -> Self {
        match value {
            SpeciesArg::Hg38 => Species::Hg38,
            SpeciesArg::Mm10 => Species::Mm10,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DirectionArg {
    IdToSymbol,
    SymbolToId,
}

impl From<DirectionArg> for Direction {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::IdToSymbol => Direction::IdToSymbol,
            DirectionArg::SymbolToId => Direction::SymbolToId,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DelimiterArg {
    Comma,
    Tab,
}

impl From<DelimiterArg> for Delimiter {
    fn from(value: DelimiterArg) -> Self {
        match value {
            DelimiterArg::Comma => Delimiter::Comma,
            DelimiterArg::Tab => Delimiter::Tab,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DedupArg {
    First,
    Last,
    Reject,
}

impl From<DedupArg> for DedupPolicy {
    fn from(value: DedupArg) -> Self {
        match value {
            DedupArg::First => DedupPolicy::FirstWins,
            DedupArg::Last => DedupPolicy::LastWins,
            DedupArg::Reject => DedupPolicy::Reject,
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
