use anyhow::{Context, Result};
use cosmo::domain::config::ImportConfig;
use cosmo::format::{Payload, from_format};
use cosmo::mapping::FromMappingOptions;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

#[derive(Debug)]
pub struct ImportArgs<'a> {
    pub file: &'a Path,
    pub cosmology: Option<&'a str>,
    pub move_to_meta: bool,
    pub format: Option<&'a str>,
}

/// Reads a cosmology and prints it with its metadata.
///
/// # Errors
/// Unreadable input, or any conversion error.
pub fn import(args: &ImportArgs<'_>, defaults: &ImportConfig) -> Result<()> {
    let text = if args.file == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).context("reading stdin")?;
        buffer
    } else {
        fs::read_to_string(args.file).with_context(|| format!("reading {}", args.file.display()))?
    };

    let mut options = FromMappingOptions::from(defaults);
    options.move_to_meta |= args.move_to_meta;
    if let Some(class) = args.cosmology {
        options = options.cosmology(class);
    }

    let cosmo = from_format(&Payload::Text(text), args.format, &options)
        .with_context(|| format!("importing {}", args.file.display()))?;

    println!("{cosmo}");
    if !cosmo.meta().is_empty() {
        println!("meta: {}", cosmo.meta());
    }
    Ok(())
}
