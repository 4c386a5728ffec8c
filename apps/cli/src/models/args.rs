//! Command-line arguments of the `cosmo` tool.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "cosmo")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Convert cosmologies to and from mappings and JSON")]
pub struct Cli {
    /// Configuration file (defaults to `cosmo.toml` in the working directory, if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List realizations, cosmology classes and formats
    List {},
    /// Write a realization in the given format
    Export {
        /// Realization name, e.g. 'Planck18'
        realization: String,
        /// Output format ('json' or 'mapping')
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Produce an ordered mapping
        #[arg(long)]
        ordered: bool,
        /// Write the class as its qualified name
        #[arg(long)]
        class_as_str: bool,
        /// Write metadata at the top level instead of under 'meta'
        #[arg(long)]
        flatten_meta: bool,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Read a cosmology from a JSON file ('-' for stdin)
    Import {
        file: PathBuf,
        /// Target class, overriding the file's 'cosmology' entry
        #[arg(long)]
        cosmology: Option<String>,
        /// Fold unrecognized keys into metadata
        #[arg(long)]
        move_to_meta: bool,
        /// Input format (identified from the content when omitted)
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Write a realization and read it back, checking the result is equal
    Roundtrip {
        /// Realization name, or 'all'
        realization: String,
        #[arg(short, long, default_value = "json")]
        format: String,
    },
}
