use airframe_core::error::AirframeError;
use std::path::PathBuf;

use crate::commands::CatalogArg;
use crate::output;

pub fn run(
    input_file: PathBuf,
    aircraft: &str,
    catalog: CatalogArg,
    output_format: &str,
) -> Result<(), AirframeError> {
    let catalog = catalog.load()?;
    let profile = catalog
        .profile(aircraft)
        .ok_or_else(|| AirframeError::UnknownAircraft(aircraft.to_string()))?;

    let markup = std::fs::read_to_string(&input_file)?;
    let record = airframe_core::extract(profile, &catalog, &markup)?;

    match output_format {
        "json" => output::json::print(std::slice::from_ref(&record))?,
        _ => output::table::print_record(&record),
    }

    Ok(())
}
