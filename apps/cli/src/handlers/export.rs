use anyhow::{Context, Result};
use cosmo::domain::config::ExportConfig;
use cosmo::domain::mapping::MappingKind;
use cosmo::format::{Payload, to_format};
use cosmo::mapping::ToMappingOptions;
use cosmo::realizations;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub struct ExportArgs<'a> {
    pub realization: &'a str,
    pub format: &'a str,
    pub ordered: bool,
    pub class_as_str: bool,
    pub flatten_meta: bool,
    pub output: Option<&'a Path>,
}

/// Writes a realization. Flags switch options on; configured defaults stay otherwise.
///
/// # Errors
/// Unknown realization or format, or an unwritable output file.
pub fn export(args: &ExportArgs<'_>, defaults: &ExportConfig) -> Result<()> {
    let cosmo = realizations::get(args.realization)?;

    let mut options = ToMappingOptions::from(defaults);
    if args.ordered {
        options.kind = MappingKind::OrderedDict;
    }
    options.cosmology_as_str |= args.class_as_str;
    options.move_from_meta |= args.flatten_meta;

    let payload = to_format(&cosmo, args.format, &options)
        .with_context(|| format!("exporting {} as {}", args.realization, args.format))?;
    let rendered = render(&payload);

    match args.output {
        Some(path) => {
            fs::write(path, rendered + "\n")
                .with_context(|| format!("writing {}", path.display()))?;
            info!(realization = args.realization, path = %path.display(), "Exported");
        },
        None => println!("{rendered}"),
    }
    Ok(())
}

pub fn render(payload: &Payload) -> String {
    match payload {
        Payload::Mapping(map) => map.to_string(),
        Payload::Text(text) => text.clone(),
    }
}
