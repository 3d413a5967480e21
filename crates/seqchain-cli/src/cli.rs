use clap::{Args, Parser, Subcommand, ValueEnum};
use seqchain::core::models::kind::{SequenceKind, Step};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "seqchain - validate, mutate, search and transform DNA, RNA and protein sequences.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used by `batch`.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a sequence and print it as `>id: symbols`.
    Render(SequenceArgs),
    /// Replace one symbol of a sequence and print the result.
    Mutate(MutateArgs),
    /// Report every start offset of one or more motifs.
    Motif(MotifArgs),
    /// Run a chain of transformations (complement, transcribe, translate) on one sequence.
    Chain(ChainArgs),
    /// Run a chain over every record of a TOML job file.
    Batch(BatchArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `>id: symbols` line per stage, motif hits indented below.
    #[default]
    Text,
    /// Comma-separated rows with a header line.
    Csv,
}

/// The sequence a single-record command operates on.
#[derive(Args, Debug, Clone)]
pub struct SequenceArgs {
    /// Sequence kind: dna, rna or protein.
    #[arg(short, long, value_name = "KIND")]
    pub kind: SequenceKind,

    /// Sequence identifier.
    #[arg(long = "id", value_name = "ID")]
    pub identifier: String,

    /// Sequence symbols (case-sensitive).
    #[arg(short, long, value_name = "SYMBOLS")]
    pub symbols: String,
}

/// Arguments for the `mutate` subcommand.
#[derive(Args, Debug)]
pub struct MutateArgs {
    #[command(flatten)]
    pub sequence: SequenceArgs,

    /// Zero-based position to replace.
    #[arg(short, long, value_name = "INT")]
    pub position: usize,

    /// Replacement symbol; must belong to the kind's alphabet.
    #[arg(long, value_name = "CHAR")]
    pub symbol: char,
}

/// Arguments for the `motif` subcommand.
#[derive(Args, Debug)]
pub struct MotifArgs {
    #[command(flatten)]
    pub sequence: SequenceArgs,

    /// Motif to search for. Can be used multiple times.
    #[arg(short, long = "motif", value_name = "MOTIF", required = true)]
    pub motifs: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `chain` subcommand.
#[derive(Args, Debug)]
pub struct ChainArgs {
    #[command(flatten)]
    pub sequence: SequenceArgs,

    /// Transformation to apply, in order. Can be used multiple times.
    /// Example: --step transcribe --step translate
    #[arg(short = 't', long = "step", value_name = "STEP")]
    pub steps: Vec<Step>,

    /// Motif to search for in the final sequence. Can be used multiple times.
    #[arg(short, long = "motif", value_name = "MOTIF")]
    pub motifs: Vec<String>,

    /// Also print the input and every intermediate sequence.
    #[arg(long)]
    pub keep_intermediates: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Path to the job file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Write results to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override `chain.steps` from the job file. Can be used multiple times.
    #[arg(short = 't', long = "step", value_name = "STEP")]
    pub steps: Vec<Step>,

    /// Override `chain.motifs` from the job file. Can be used multiple times.
    #[arg(short, long = "motif", value_name = "MOTIF")]
    pub motifs: Vec<String>,

    /// Keep intermediates, overriding the job file.
    #[arg(long)]
    pub keep_intermediates: bool,

    /// Set a specific configuration value, overriding the job file.
    /// Can be used multiple times. Example: -S chain.steps=transcribe,translate
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
