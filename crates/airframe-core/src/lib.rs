pub mod batch;
pub mod dataset;
pub mod error;
pub mod extraction;
pub mod fields;
pub mod fuel;
pub mod model;
pub mod parsing;
pub mod profiles;
pub mod record;
pub mod source;

use error::AirframeError;
use extraction::Document;
use model::{OutputRecord, Strategy};
use profiles::schema::{AircraftProfile, Catalog};

/// Main API entry point: extract one aircraft's record from its article.
///
/// The catalog supplies the fuel model and turnaround table the profile
/// refers to. Pure with respect to its inputs.
pub fn extract(
    profile: &AircraftProfile,
    catalog: &Catalog,
    markup: &str,
) -> Result<OutputRecord, AirframeError> {
    let document = Document::parse(markup);

    let result = match profile.strategy {
        Strategy::Table => extraction::table::extract_table(profile, &document.tables)?,
        Strategy::List => extraction::list::extract_list(profile, &document.list_items)?,
    };

    let record = record::assemble(profile, catalog, result)?;
    log::info!(
        "{}: {} seats, {} km, {} km/h, {} extras",
        record.id,
        record.seats,
        record.range_km,
        record.cruise_kmh,
        record.extras.len()
    );
    Ok(record)
}
