#![allow(clippy::print_stderr, clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::export::ExportArgs;
use crate::handlers::import::ImportArgs;
use crate::handlers::{export, import, list, roundtrip};
use crate::models::args::{Cli, Commands};

use anyhow::{Context, Result};
use clap::Parser;
use cosmo::domain::config::CosmoConfig;
use cosmo::kernel::config::load_config;
use cosmo_logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg: CosmoConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let mut logger = Logger::builder(env!("CARGO_BIN_NAME")).with_config(&cfg.logging)?;
    match cli.verbose {
        0 => {},
        1 => logger = logger.level(LevelFilter::DEBUG),
        _ => logger = logger.level(LevelFilter::TRACE),
    }
    let _logger = logger.init()?;

    match cli.command {
        Commands::List {} => list::list(),
        Commands::Export { realization, format, ordered, class_as_str, flatten_meta, output } => {
            let args = ExportArgs {
                realization: &realization,
                format: &format,
                ordered,
                class_as_str,
                flatten_meta,
                output: output.as_deref(),
            };
            export::export(&args, &cfg.export)?;
        },
        Commands::Import { file, cosmology, move_to_meta, format } => {
            let args = ImportArgs {
                file: &file,
                cosmology: cosmology.as_deref(),
                move_to_meta,
                format: format.as_deref(),
            };
            import::import(&args, &cfg.import)?;
        },
        Commands::Roundtrip { realization, format } => roundtrip::roundtrip(&realization, &format)?,
    }

    Ok(())
}
