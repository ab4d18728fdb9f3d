pub mod matcher;

use crate::model::{ExtraFields, FieldKey};
use crate::parsing::Unit;
use matcher::Entry;

/// One optional field: how to find its row and how to read its value.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub key: FieldKey,
    /// Label substrings in priority order.
    pub keywords: &'static [&'static str],
    pub unit: Unit,
    /// Labels containing any of these are never this field.
    pub exclude: &'static [&'static str],
}

const fn field(key: FieldKey, keywords: &'static [&'static str], unit: Unit) -> FieldDef {
    FieldDef {
        key,
        keywords,
        unit,
        exclude: &[],
    }
}

/// Every optional field, in output order.
pub static FIELD_REGISTRY: &[FieldDef] = &[
    field(FieldKey::Crew, &["crew"], Unit::Count),
    field(FieldKey::ThreeClassSeats, &["3-class seats", "three-class"], Unit::Count),
    field(FieldKey::TwoClassSeats, &["2-class seats", "two-class"], Unit::Count),
    field(
        FieldKey::OneClassMaxSeats,
        &["1-class", "one-class", "max seating", "maximum seating"],
        Unit::Count,
    ),
    field(
        FieldKey::CargoVolumeM3,
        &["cargo volume", "cargo capacity", "hold"],
        Unit::Volume,
    ),
    field(FieldKey::MtowKg, &["mtow", "max takeoff weight"], Unit::Mass),
    field(FieldKey::MaxPayloadKg, &["max payload", "payload"], Unit::Mass),
    field(FieldKey::OewKg, &["oew", "operating empty weight"], Unit::Mass),
    field(FieldKey::FuelCapacityL, &["fuel capacity", "max fuel"], Unit::FuelVolume),
    field(FieldKey::LengthM, &["length"], Unit::Length),
    field(FieldKey::WingspanM, &["wingspan", "span"], Unit::Length),
    FieldDef {
        key: FieldKey::HeightM,
        keywords: &["height"],
        unit: Unit::Length,
        exclude: &["width"],
    },
    field(FieldKey::WingAreaM2, &["wing area"], Unit::Area),
    field(FieldKey::EngineType, &["engines", "engine"], Unit::Text),
    field(FieldKey::EngineThrustKn, &["thrust"], Unit::Force),
    field(FieldKey::ServiceCeilingM, &["ceiling", "service ceiling"], Unit::Length),
    field(
        FieldKey::MaxSpeedKmh,
        &["maximum speed", "high speed cruise"],
        Unit::Speed,
    ),
    field(FieldKey::TakeoffDistanceM, &["takeoff"], Unit::Length),
    field(FieldKey::LandingDistanceM, &["landing"], Unit::Length),
    field(FieldKey::IcaoType, &["icao", "icao type"], Unit::Text),
];

/// Run every registry field against the entries.
///
/// A field is kept only when its row is found and its value parses to
/// something non-zero and non-blank.
pub fn collect_fields(entries: &[Entry<'_>]) -> ExtraFields {
    let mut extras = ExtraFields::new();

    for def in FIELD_REGISTRY {
        let Some(raw) = matcher::find(entries, def.keywords, def.exclude) else {
            continue;
        };
        match def.unit.parse(raw) {
            Some(value) if !value.is_empty() => extras.insert(def.key, value),
            _ => {}
        }
    }

    extras
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldValue;
    use rust_decimal_macros::dec;

    #[test]
    fn test_registry_keys_unique() {
        for (i, def) in FIELD_REGISTRY.iter().enumerate() {
            assert!(
                FIELD_REGISTRY[i + 1..].iter().all(|other| other.key != def.key),
                "duplicate key {}",
                def.key
            );
        }
    }

    #[test]
    fn test_collect_basic_fields() {
        let entries = vec![
            ("crew", "Two"),
            ("length", "37.57 m (123 ft 3 in)"),
            ("mtow", "78,000 kg (172,000 lb)"),
            ("engines (×2)", "CFM56-5B[4]"),
        ];
        let extras = collect_fields(&entries);

        assert!(!extras.contains(FieldKey::Crew));
        assert_eq!(
            extras.get(FieldKey::LengthM),
            Some(&FieldValue::Quantity(dec!(37.57)))
        );
        assert_eq!(
            extras.get(FieldKey::MtowKg),
            Some(&FieldValue::Quantity(dec!(78000)))
        );
        assert_eq!(
            extras.get(FieldKey::EngineType),
            Some(&FieldValue::Text("CFM56-5B".into()))
        );
    }

    #[test]
    fn test_height_excludes_width() {
        let entries = vec![
            ("cabin width / height", "3.70 m"),
            ("height", "11.76 m"),
        ];
        let extras = collect_fields(&entries);
        assert_eq!(
            extras.get(FieldKey::HeightM),
            Some(&FieldValue::Quantity(dec!(11.76)))
        );
    }

    #[test]
    fn test_zero_value_dropped() {
        let entries = vec![("wing area", "0 m2"), ("ceiling", "12,500 m")];
        let extras = collect_fields(&entries);
        assert!(!extras.contains(FieldKey::WingAreaM2));
        assert_eq!(
            extras.get(FieldKey::ServiceCeilingM),
            Some(&FieldValue::Quantity(dec!(12500)))
        );
    }

    #[test]
    fn test_high_speed_cruise_maps_to_max_speed() {
        let entries = vec![("high speed cruise", "Mach 0.82")];
        let extras = collect_fields(&entries);
        assert_eq!(
            extras.get(FieldKey::MaxSpeedKmh),
            Some(&FieldValue::Quantity(dec!(1004.5)))
        );
    }

    #[test]
    fn test_output_follows_registry_order() {
        let entries = vec![("icao type", "A320"), ("crew", "2"), ("length", "37.57 m")];
        let keys: Vec<_> = collect_fields(&entries).iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![FieldKey::Crew, FieldKey::LengthM, FieldKey::IcaoType]);
    }
}
