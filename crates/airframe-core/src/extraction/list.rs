use crate::error::AirframeError;
use crate::extraction::ListItem;
use crate::fields::collect_fields;
use crate::fields::matcher::{self, Entry};
use crate::model::{ExtractionResult, Role};
use crate::parsing::units::{parse_distance, parse_speed};
use crate::parsing::values::parse_count;
use crate::profiles::schema::AircraftProfile;

/// Seat bullets are never seat width/pitch, cargo or range lines.
const SEAT_EXCLUDE: &[&str] = &["width", "pitch", "cargo", "range"];
const NO_EXCLUDE: &[&str] = &[];

/// Read a profile's figures from bolded bullet items.
pub fn extract_list(
    profile: &AircraftProfile,
    items: &[ListItem],
) -> Result<ExtractionResult, AirframeError> {
    let entries: Vec<Entry<'_>> = items
        .iter()
        .map(|item| (item.label.as_str(), item.text.as_str()))
        .collect();

    let seats = matcher::find_map(&entries, &profile.seat_keywords, SEAT_EXCLUDE, |text| {
        parse_count(text).filter(|n| *n > 0)
    });
    let range_km = matcher::find_map(&entries, &profile.range_keywords, NO_EXCLUDE, |text| {
        parse_distance(text).filter(|d| !d.is_zero())
    });
    let cruise_kmh = matcher::find_map(&entries, &profile.cruise_keywords, NO_EXCLUDE, |text| {
        parse_speed(text).filter(|d| !d.is_zero())
    });

    let seats = match seats.or(profile.default_seats) {
        Some(n) if n > 0 || profile.role == Role::Cargo => n,
        _ => return Err(unresolved(profile, &entries, "seats", &profile.seat_keywords, SEAT_EXCLUDE)),
    };
    let Some(range_km) = range_km else {
        return Err(unresolved(profile, &entries, "range", &profile.range_keywords, NO_EXCLUDE));
    };
    let Some(cruise_kmh) = cruise_kmh else {
        return Err(unresolved(profile, &entries, "cruise speed", &profile.cruise_keywords, NO_EXCLUDE));
    };

    log::debug!("{}: read {} bulleted items", profile.id, entries.len());

    Ok(ExtractionResult {
        seats,
        range_km,
        cruise_kmh,
        extras: collect_fields(&entries),
    })
}

/// An absent bullet is `NoMatchingList`; a bullet whose value would not
/// parse is `MissingRequiredField`.
fn unresolved(
    profile: &AircraftProfile,
    entries: &[Entry<'_>],
    field: &str,
    keywords: &[String],
    exclude: &[&str],
) -> AirframeError {
    let labelled = matcher::find_map(entries, keywords, exclude, |_| Some(())).is_some();
    if labelled {
        AirframeError::MissingRequiredField {
            aircraft: profile.id.clone(),
            field: field.to_string(),
        }
    } else {
        AirframeError::NoMatchingList {
            aircraft: profile.id.clone(),
            field: field.to_string(),
        }
    }
}
