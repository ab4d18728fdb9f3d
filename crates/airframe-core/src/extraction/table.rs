use crate::error::AirframeError;
use crate::extraction::RawTable;
use crate::fields::matcher::{self, Entry};
use crate::fields::collect_fields;
use crate::model::{ExtractionResult, Role};
use crate::parsing::normalize::normalize_label;
use crate::parsing::units::{parse_distance, parse_speed};
use crate::parsing::values::parse_count;
use crate::profiles::schema::AircraftProfile;
use rust_decimal::Decimal;
use std::fmt;

/// Seat rows never come from cargo or range lines ("cargo capacity", "range
/// with max passengers").
const SEAT_EXCLUDE: &[&str] = &["cargo", "range"];
const NO_EXCLUDE: &[&str] = &[];

/// Why a candidate table was passed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooNarrow,
    NoSeatRow,
    NoRangeRow,
    NoVariantColumn(String),
    NoSeatSource,
    NoSeatValue,
    NoRangeValue,
    NoCruiseValue,
    ZeroSeats,
    ZeroRange,
    ZeroCruise,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooNarrow => write!(f, "fewer than two columns"),
            Rejection::NoSeatRow => write!(f, "no row matches the seat keywords"),
            Rejection::NoRangeRow => write!(f, "no row matches the range keywords"),
            Rejection::NoVariantColumn(name) => write!(f, "no column header contains '{name}'"),
            Rejection::NoSeatSource => write!(f, "no seat keywords and no default seat count"),
            Rejection::NoSeatValue => write!(f, "seat row has no value in this column"),
            Rejection::NoRangeValue => write!(f, "range row has no value in this column"),
            Rejection::NoCruiseValue => write!(f, "no cruise row with a value in this column"),
            Rejection::ZeroSeats => write!(f, "seat count did not parse"),
            Rejection::ZeroRange => write!(f, "range did not parse"),
            Rejection::ZeroCruise => write!(f, "cruise speed did not parse"),
        }
    }
}

/// Find the performance table for a profile and read it.
///
/// Candidates are tried in document order; the first table that passes the
/// shape signature, has the variant column and yields seats, range and cruise
/// speed wins.
pub fn extract_table(
    profile: &AircraftProfile,
    tables: &[RawTable],
) -> Result<ExtractionResult, AirframeError> {
    for (index, table) in tables.iter().enumerate() {
        match read_candidate(profile, table) {
            Ok(result) => {
                log::debug!("{}: using table #{}", profile.id, index);
                return Ok(result);
            }
            Err(rejection) => {
                log::debug!("{}: table #{} rejected: {}", profile.id, index, rejection);
            }
        }
    }

    Err(AirframeError::NoMatchingTable {
        aircraft: profile.id.clone(),
    })
}

/// Read one candidate table, or say why it does not qualify.
pub fn read_candidate(
    profile: &AircraftProfile,
    table: &RawTable,
) -> Result<ExtractionResult, Rejection> {
    if table.width() < 2 {
        return Err(Rejection::TooNarrow);
    }

    let labels: Vec<String> = table
        .rows
        .iter()
        .map(|row| normalize_label(row.first().map(String::as_str).unwrap_or("")))
        .collect();

    if profile.default_seats.is_none() && !matcher::has_label(&labels, &profile.seat_keywords) {
        return Err(Rejection::NoSeatRow);
    }
    if !matcher::has_label(&labels, &profile.range_keywords) {
        return Err(Rejection::NoRangeRow);
    }

    let column = resolve_column(profile, table)?;
    let entries: Vec<Entry<'_>> = labels
        .iter()
        .zip(&table.rows)
        .map(|(label, row)| (label.as_str(), row.get(column).map(String::as_str).unwrap_or("")))
        .collect();

    let extras = collect_fields(&entries);

    let mut seats = if !profile.seat_keywords.is_empty() {
        match matcher::find(&entries, &profile.seat_keywords, SEAT_EXCLUDE) {
            Some(raw) => parse_count(raw).unwrap_or(0),
            None if profile.default_seats.is_some() => 0,
            None => return Err(Rejection::NoSeatValue),
        }
    } else if profile.default_seats.is_some() {
        0
    } else {
        return Err(Rejection::NoSeatSource);
    };

    let range_raw = matcher::find(&entries, &profile.range_keywords, NO_EXCLUDE)
        .ok_or(Rejection::NoRangeValue)?;
    let cruise_raw = matcher::find(&entries, &profile.cruise_keywords, NO_EXCLUDE)
        .ok_or(Rejection::NoCruiseValue)?;

    if seats == 0 {
        if let Some(default) = profile.default_seats {
            seats = default;
        }
    }
    let range_km = parse_distance(range_raw).unwrap_or(Decimal::ZERO);
    let cruise_kmh = parse_speed(cruise_raw).unwrap_or(Decimal::ZERO);

    if seats == 0 && profile.role != Role::Cargo {
        return Err(Rejection::ZeroSeats);
    }
    if range_km.is_zero() {
        return Err(Rejection::ZeroRange);
    }
    if cruise_kmh.is_zero() {
        return Err(Rejection::ZeroCruise);
    }

    Ok(ExtractionResult {
        seats,
        range_km,
        cruise_kmh,
        extras,
    })
}

/// Index of the data column for this profile's variant.
///
/// Column 0 holds the row labels and is never a data column.
fn resolve_column(profile: &AircraftProfile, table: &RawTable) -> Result<usize, Rejection> {
    match profile.variant_column.as_deref() {
        Some(variant) => {
            let wanted = variant.to_lowercase();
            table
                .headers
                .iter()
                .enumerate()
                .skip(1)
                .find(|(_, header)| header.to_lowercase().contains(&wanted))
                .map(|(index, _)| index)
                .ok_or_else(|| Rejection::NoVariantColumn(variant.to_string()))
        }
        None => Ok(table.width() - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AircraftClass, FieldKey, FieldValue, Strategy};
    use crate::profiles::schema::{
        default_cruise_keywords, default_range_keywords, default_seat_keywords,
    };
    use rust_decimal_macros::dec;

    fn profile(variant: Option<&str>) -> AircraftProfile {
        AircraftProfile {
            id: "A320".into(),
            name: "Airbus A320".into(),
            document: "Airbus_A320".into(),
            class: AircraftClass::Narrowbody,
            fuel_model: "narrowbody_classic".into(),
            rank: 1,
            strategy: Strategy::Table,
            role: Role::Passenger,
            variant_column: variant.map(str::to_string),
            seat_keywords: default_seat_keywords(),
            range_keywords: default_range_keywords(),
            cruise_keywords: default_cruise_keywords(),
            default_seats: None,
        }
    }

    fn freighter() -> AircraftProfile {
        AircraftProfile {
            id: "B767-300F".into(),
            role: Role::Cargo,
            seat_keywords: vec![],
            default_seats: Some(0),
            ..profile(Some("767-300F"))
        }
    }

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    fn spec_table() -> RawTable {
        table(
            &["Variant", "A319", "A320", "A321"],
            &[
                &["Cockpit crew", "Two", "Two", "Two"],
                &["Seating[1]", "124", "150", "185"],
                &["Length", "33.84 m", "37.57 m", "44.51 m"],
                &["MTOW", "75,500 kg", "78,000 kg", "93,500 kg"],
                &["Range", "6,900 km", "6,100 km", "5,950 km"],
                &["Cruise speed", "Mach 0.78 (833 km/h)", "Mach 0.78 (833 km/h)", "Mach 0.78 (833 km/h)"],
            ],
        )
    }

    #[test]
    fn test_variant_column_selected() {
        let result = extract_table(&profile(Some("a320")), &[spec_table()]).unwrap();
        assert_eq!(result.seats, 150);
        assert_eq!(result.range_km, dec!(6100));
        assert_eq!(result.cruise_kmh, dec!(833));
        assert_eq!(
            result.extras.get(FieldKey::LengthM),
            Some(&FieldValue::Quantity(dec!(37.57)))
        );
        assert_eq!(
            result.extras.get(FieldKey::MtowKg),
            Some(&FieldValue::Quantity(dec!(78000)))
        );
        assert!(!result.extras.contains(FieldKey::Crew));
    }

    #[test]
    fn test_last_column_without_variant() {
        let result = extract_table(&profile(None), &[spec_table()]).unwrap();
        assert_eq!(result.seats, 185);
        assert_eq!(result.range_km, dec!(5950));
    }

    #[test]
    fn test_missing_variant_rejects_table() {
        let err = read_candidate(&profile(Some("A350")), &spec_table()).unwrap_err();
        assert_eq!(err, Rejection::NoVariantColumn("A350".into()));
    }

    #[test]
    fn test_table_without_range_row_never_selected() {
        let only = table(
            &["Variant", "A320"],
            &[&["Seating", "150"], &["Cruise speed", "833 km/h"]],
        );
        assert_eq!(
            read_candidate(&profile(None), &only).unwrap_err(),
            Rejection::NoRangeRow
        );
        assert!(matches!(
            extract_table(&profile(None), &[only]),
            Err(AirframeError::NoMatchingTable { .. })
        ));
    }

    #[test]
    fn test_narrow_table_rejected() {
        let narrow = table(&["Range"], &[&["6,100 km"]]);
        assert_eq!(
            read_candidate(&profile(None), &narrow).unwrap_err(),
            Rejection::TooNarrow
        );
    }

    #[test]
    fn test_later_table_used_when_first_lacks_signature() {
        let infobox = table(
            &["0", "1"],
            &[&["Role", "Narrow-body airliner"], &["Manufacturer", "Airbus"]],
        );
        let result = extract_table(&profile(Some("A321")), &[infobox, spec_table()]).unwrap();
        assert_eq!(result.seats, 185);
    }

    #[test]
    fn test_seat_row_excludes_cargo_and_range() {
        let t = table(
            &["Variant", "A320"],
            &[
                &["Max cargo", "37.4 m3"],
                &["Range, max passengers", "6,100 km"],
                &["Max seats", "150"],
                &["Cruise", "833 km/h"],
            ],
        );
        let result = read_candidate(&profile(None), &t).unwrap();
        assert_eq!(result.seats, 150);
    }

    #[test]
    fn test_unparseable_speed_rejects() {
        let t = table(
            &["Variant", "A320"],
            &[&["Seating", "150"], &["Range", "6,100 km"], &["Cruise", "450 kn"]],
        );
        assert_eq!(
            read_candidate(&profile(None), &t).unwrap_err(),
            Rejection::ZeroCruise
        );
    }

    #[test]
    fn test_freighter_ignores_seat_rows() {
        let t = table(
            &["Variant", "767-300ER", "767-300F"],
            &[
                &["Seating", "218", "—"],
                &["Max payload", "—", "52,700 kg"],
                &["Range", "11,070 km", "6,025 km"],
                &["Cruise speed", "851 km/h", "851 km/h"],
            ],
        );
        let result = read_candidate(&freighter(), &t).unwrap();
        assert_eq!(result.seats, 0);
        assert_eq!(result.range_km, dec!(6025));
        assert_eq!(
            result.extras.get(FieldKey::MaxPayloadKg),
            Some(&FieldValue::Quantity(dec!(52700)))
        );
    }

    #[test]
    fn test_default_seats_applied_when_seat_row_missing() {
        let p = AircraftProfile {
            default_seats: Some(70),
            ..profile(None)
        };
        let t = table(
            &["Variant", "ATR 72-600"],
            &[&["Range", "1,528 km"], &["Cruise speed", "510 km/h"]],
        );
        assert_eq!(read_candidate(&p, &t).unwrap().seats, 70);
    }
}
