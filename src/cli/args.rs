//! Command line argument parsing for the textprep CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// textprep - text preprocessing for document clustering
#[derive(Parser, Debug, Clone)]
#[command(name = "textprep")]
#[command(about = "Preprocess text records for vectorization and clustering")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TextprepArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TextprepArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run a pipeline over an input file
    Run(RunArgs),

    /// Show the steps of a pipeline config
    Steps(StepsArgs),
}

/// Arguments for running a pipeline
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Pipeline config file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: PathBuf,

    /// Input file, one record per line
    #[arg(value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Column delimiter of the input records
    #[arg(short, long)]
    pub delimiter: Option<char>,

    /// Zero-based indices of the columns holding the text (requires --delimiter)
    #[arg(long, value_delimiter = ',', requires = "delimiter")]
    pub columns: Vec<usize>,

    /// Skip the first line of the input
    #[arg(long)]
    pub skip_header: bool,

    /// Process documents in parallel, overriding the config
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for showing pipeline steps
#[derive(Parser, Debug, Clone)]
pub struct StepsArgs {
    /// Pipeline config file (JSON)
    #[arg(value_name = "CONFIG_FILE")]
    pub config: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// One processed record per line
    Human,
    /// JSON output
    Json,
}
