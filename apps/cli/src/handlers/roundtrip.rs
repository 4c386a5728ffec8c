use anyhow::{Result, bail};
use cosmo::format::{from_format, to_format};
use cosmo::mapping::{FromMappingOptions, ToMappingOptions};
use cosmo::realizations;

/// Writes and re-reads realizations, failing on the first difference.
///
/// # Errors
/// Conversion errors, or a re-read instance that differs from the original.
pub fn roundtrip(realization: &str, format: &str) -> Result<()> {
    let cosmologies = if realization == "all" {
        realizations::all()?
    } else {
        vec![realizations::get(realization)?]
    };

    for cosmo in cosmologies {
        let payload = to_format(&cosmo, format, &ToMappingOptions::default())?;
        let back = from_format(&payload, Some(format), &FromMappingOptions::default())?;

        let name = cosmo.name().unwrap_or("<unnamed>");
        if back != cosmo || back.meta() != cosmo.meta() {
            bail!("{name} changed after a {format} round trip: {back}");
        }
        println!("{name}: ok ({format})");
    }
    Ok(())
}
