use crate::error::AirframeError;
use crate::fuel::fuel_cost_per_km;
use crate::model::{ExtractionResult, OutputRecord, Role};
use crate::profiles::schema::{AircraftProfile, Catalog};
use rust_decimal::Decimal;

/// Turn an extraction result into a published record.
///
/// Freighters lose their seat count and per-cabin seat fields before the
/// fuel cost is derived, so their cost never bills seats.
pub fn assemble(
    profile: &AircraftProfile,
    catalog: &Catalog,
    result: ExtractionResult,
) -> Result<OutputRecord, AirframeError> {
    let ExtractionResult {
        mut seats,
        range_km,
        cruise_kmh,
        mut extras,
    } = result;

    if profile.role == Role::Cargo {
        seats = 0;
        extras.retain(|key| !key.is_cabin_seating());
    }

    let model = catalog.fuel_model(&profile.fuel_model).ok_or_else(|| {
        AirframeError::CatalogInvalid(format!(
            "aircraft '{}' references unknown fuel model '{}'",
            profile.id, profile.fuel_model
        ))
    })?;
    let turnaround_min = catalog.turnaround(profile.class).ok_or_else(|| {
        AirframeError::CatalogInvalid(format!("no turnaround time for class '{}'", profile.class))
    })?;

    let fuel_cost_per_km = fuel_cost_per_km(model, seats, &extras);

    Ok(OutputRecord {
        id: profile.id.clone(),
        name: profile.name.clone(),
        range_km: one_place(range_km),
        seats,
        cruise_kmh: one_place(cruise_kmh),
        role: profile.role,
        turnaround_min,
        extras,
        fuel_cost_per_km,
        rank: profile.rank,
    })
}

fn one_place(value: Decimal) -> Decimal {
    let mut value = value.round_dp(1);
    value.rescale(1);
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExtraFields, FieldKey, FieldValue};
    use crate::profiles::builtin::load_preset;
    use rust_decimal_macros::dec;

    fn result(seats: u32) -> ExtractionResult {
        let mut extras = ExtraFields::new();
        extras.insert(FieldKey::TwoClassSeats, FieldValue::Count(218));
        extras.insert(FieldKey::MtowKg, FieldValue::Quantity(dec!(186880)));
        extras.insert(FieldKey::MaxPayloadKg, FieldValue::Quantity(dec!(52700)));
        ExtractionResult {
            seats,
            range_km: dec!(6025),
            cruise_kmh: dec!(851.04),
            extras,
        }
    }

    #[test]
    fn test_cargo_suppression() {
        let catalog = load_preset("airliners").unwrap();
        let profile = catalog.profile("B767-300F").unwrap();
        let record = assemble(profile, &catalog, result(218)).unwrap();

        assert_eq!(record.seats, 0);
        assert_eq!(record.role, Role::Cargo);
        assert!(!record.extras.contains(FieldKey::TwoClassSeats));
        assert!(record.extras.contains(FieldKey::MaxPayloadKg));
        assert_eq!(record.turnaround_min, 75);
        assert_eq!(record.fuel_cost_per_km.to_string(), "2.90");
    }

    #[test]
    fn test_fixed_precision() {
        let catalog = load_preset("airliners").unwrap();
        let profile = catalog.profile("A320").unwrap();
        let record = assemble(profile, &catalog, result(150)).unwrap();

        assert_eq!(record.range_km.to_string(), "6025.0");
        assert_eq!(record.cruise_kmh.to_string(), "851.0");
        assert_eq!(record.seats, 150);
        assert!(record.extras.contains(FieldKey::TwoClassSeats));
        assert_eq!(record.rank, profile.rank);
    }
}
