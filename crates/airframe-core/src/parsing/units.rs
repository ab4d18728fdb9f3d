use crate::model::FieldValue;
use crate::parsing::normalize::clean_text;
use crate::parsing::values::{parse_count, parse_decimal};
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::LazyLock;

pub const MPH_TO_KMH: Decimal = dec!(1.60934);
pub const MACH_KMH: Decimal = dec!(1225);
pub const NMI_TO_KM: Decimal = dec!(1.852);
pub const MI_TO_KM: Decimal = dec!(1.60934);
pub const FT_TO_M: Decimal = dec!(0.3048);
pub const SQFT_TO_M2: Decimal = dec!(0.092903);
pub const TONNE_TO_KG: Decimal = dec!(1000);
pub const LB_TO_KG: Decimal = dec!(0.453592);
pub const CUFT_TO_M3: Decimal = dec!(0.0283168);
pub const GAL_TO_L: Decimal = dec!(3.78541);
pub const LBF_TO_KN: Decimal = dec!(0.00444822);

/// A unit pattern: the first capture is the number, `factor` scales it.
struct Pattern {
    regex: Regex,
    factor: Decimal,
}

impl Pattern {
    fn new(pattern: &str, factor: Decimal) -> Pattern {
        Pattern {
            regex: Regex::new(pattern).expect("valid unit regex"),
            factor,
        }
    }
}

/// Try each pattern in order; the first one present anywhere in the text wins.
///
/// A number that overflows once converted is "no match".
fn convert(text: &str, patterns: &[Pattern]) -> Option<Decimal> {
    let text = clean_text(text);
    for pattern in patterns {
        if let Some(caps) = pattern.regex.captures(&text) {
            return parse_decimal(caps.get(1)?.as_str())?.checked_mul(pattern.factor);
        }
    }
    None
}

static SPEED: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern::new(r"(?i)([0-9][0-9,.]*)\s*km/?h", Decimal::ONE),
        Pattern::new(r"(?i)([0-9][0-9,.]*)\s*mph", MPH_TO_KMH),
        Pattern::new(r"Mach\s*([0-9.]+)", MACH_KMH),
    ]
});

static DISTANCE: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern::new(r"([0-9][0-9,.]*)\s*km", Decimal::ONE),
        Pattern::new(r"(?i)([0-9][0-9,.]*)\s*nmi", NMI_TO_KM),
        Pattern::new(r"([0-9][0-9,.]*)\s*mi", MI_TO_KM),
    ]
});

static LENGTH: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        // `m` must not run into a digit, or `m2`/`m3` would read as metres.
        Pattern::new(r"([0-9][0-9,.]*)\s*m(?:[^0-9]|$)", Decimal::ONE),
        Pattern::new(r"([0-9][0-9,.]*)\s*ft", FT_TO_M),
    ]
});

static AREA: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern::new(r"([0-9][0-9,.]*)\s*m\^?2", Decimal::ONE),
        Pattern::new(r"(?i)([0-9][0-9,.]*)\s*sq\s*ft", SQFT_TO_M2),
    ]
});

static MASS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern::new(r"([0-9][0-9,.]*)\s*kg", Decimal::ONE),
        Pattern::new(r"([0-9][0-9,.]*)\s*t", TONNE_TO_KG),
        Pattern::new(r"([0-9][0-9,.]*)\s*lb", LB_TO_KG),
    ]
});

static VOLUME: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern::new(r"([0-9][0-9,.]*)\s*m\^?3", Decimal::ONE),
        Pattern::new(r"(?i)([0-9][0-9,.]*)\s*(?:cu|cubic)\s*ft", CUFT_TO_M3),
    ]
});

static FUEL_VOLUME: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern::new(r"([0-9][0-9,.]*)\s*L", Decimal::ONE),
        Pattern::new(r"([0-9][0-9,.]*)\s*(?:US\s*)?gal", GAL_TO_L),
    ]
});

static FORCE: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    vec![
        Pattern::new(r"([0-9][0-9,.]*)\s*kN", Decimal::ONE),
        Pattern::new(r"(?i)([0-9][0-9,.]*)\s*lbf", LBF_TO_KN),
    ]
});

/// Speed in km/h from `km/h`, `mph` or `Mach n`.
pub fn parse_speed(text: &str) -> Option<Decimal> {
    convert(text, &SPEED)
}

/// Distance in km from `km`, `nmi` or `mi`.
pub fn parse_distance(text: &str) -> Option<Decimal> {
    convert(text, &DISTANCE)
}

/// Length in metres from `m` or `ft`.
pub fn parse_length(text: &str) -> Option<Decimal> {
    convert(text, &LENGTH)
}

/// Area in m² from `m2`/`m^2` or `sq ft`.
pub fn parse_area(text: &str) -> Option<Decimal> {
    convert(text, &AREA)
}

/// Mass in kg from `kg`, `t` or `lb`.
///
/// The bare `t` suffix also fires on any number followed by a word starting
/// with `t` ("2 to 4"); `kg` is tried first so most rows never reach it.
pub fn parse_mass(text: &str) -> Option<Decimal> {
    convert(text, &MASS)
}

/// Volume in m³ from `m3`/`m^3` or `cu ft`.
pub fn parse_volume(text: &str) -> Option<Decimal> {
    convert(text, &VOLUME)
}

/// Fuel volume in litres from `L` or `gal`.
pub fn parse_fuel_volume(text: &str) -> Option<Decimal> {
    convert(text, &FUEL_VOLUME)
}

/// Force in kN from `kN` or `lbf`.
pub fn parse_force(text: &str) -> Option<Decimal> {
    convert(text, &FORCE)
}

/// The dimension a registry field is parsed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Count,
    Speed,
    Distance,
    Length,
    Area,
    Mass,
    Volume,
    FuelVolume,
    Force,
    Text,
}

impl Unit {
    pub fn parse(&self, text: &str) -> Option<FieldValue> {
        let quantity = match self {
            Unit::Count => return parse_count(text).map(FieldValue::Count),
            Unit::Text => return Some(FieldValue::Text(clean_text(text))),
            Unit::Speed => parse_speed(text),
            Unit::Distance => parse_distance(text),
            Unit::Length => parse_length(text),
            Unit::Area => parse_area(text),
            Unit::Mass => parse_mass(text),
            Unit::Volume => parse_volume(text),
            Unit::FuelVolume => parse_fuel_volume(text),
            Unit::Force => parse_force(text),
        };
        quantity.map(|d| FieldValue::Quantity(d.normalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_speed_kmh() {
        assert_eq!(parse_speed("400 km/h"), Some(dec!(400)));
        assert_eq!(parse_speed("828 KMH (447 kn)"), Some(dec!(828)));
    }

    #[test]
    fn test_speed_mph() {
        let kmh = parse_speed("250 mph").unwrap();
        assert!((kmh - dec!(402.34)).abs() <= dec!(0.01));
    }

    #[test]
    fn test_speed_mach() {
        assert_eq!(parse_speed("Mach 0.85"), Some(dec!(1041.25)));
    }

    #[test]
    fn test_speed_kmh_preferred_over_mach() {
        assert_eq!(parse_speed("Mach 0.78 (833 km/h; 450 kn)"), Some(dec!(833)));
    }

    #[test]
    fn test_speed_unitless() {
        assert_eq!(parse_speed("450 kn"), None);
    }

    #[test]
    fn test_distance_units() {
        assert_eq!(parse_distance("6,300 km (3,400 nmi)"), Some(dec!(6300)));
        assert_eq!(parse_distance("3,400 nmi"), Some(dec!(6296.8)));
        assert_eq!(parse_distance("1,000 mi"), Some(dec!(1609.34)));
    }

    #[test]
    fn test_length_not_confused_with_area() {
        assert_eq!(parse_length("122.6 m2"), None);
        assert_eq!(parse_length("37.57 m (123 ft 3 in)"), Some(dec!(37.57)));
        assert_eq!(parse_length("100 ft"), Some(dec!(30.48)));
    }

    #[test]
    fn test_length_at_end_of_text() {
        assert_eq!(parse_length("11.76 m"), Some(dec!(11.76)));
    }

    #[test]
    fn test_area() {
        assert_eq!(parse_area("122.6 m2 (1,320 sq ft)"), Some(dec!(122.6)));
        assert_eq!(parse_area("122.6 m^2"), Some(dec!(122.6)));
        assert_eq!(parse_area("1,000 sq ft"), Some(dec!(92.903)));
    }

    #[test]
    fn test_mass_order() {
        assert_eq!(parse_mass("78,000 kg (171,961 lb)"), Some(dec!(78000)));
        assert_eq!(parse_mass("20.4 t"), Some(dec!(20400)));
        assert_eq!(parse_mass("1,000 lb"), Some(dec!(453.592)));
    }

    #[test]
    fn test_volume() {
        assert_eq!(parse_volume("37.4 m3"), Some(dec!(37.4)));
        assert_eq!(parse_volume("1,000 cu ft"), Some(dec!(28.3168)));
        assert_eq!(parse_volume("1,000 Cubic ft"), Some(dec!(28.3168)));
    }

    #[test]
    fn test_fuel_volume() {
        assert_eq!(parse_fuel_volume("24,210 L (6,400 US gal)"), Some(dec!(24210)));
        assert_eq!(parse_fuel_volume("100 US gal"), Some(dec!(378.541)));
    }

    #[test]
    fn test_force() {
        assert_eq!(parse_force("120.6 kN"), Some(dec!(120.6)));
        assert_eq!(parse_force("10,000 lbf"), Some(dec!(44.4822)));
    }

    #[test]
    fn test_footnotes_stripped_before_matching() {
        assert_eq!(parse_distance("[1]5,000 km[2]"), Some(dec!(5000)));
    }

    /// A digit followed by `zeros` zeros, near the top of the decimal range.
    fn huge(lead: char, zeros: usize) -> String {
        format!("{lead}{}", "0".repeat(zeros))
    }

    #[test]
    fn test_overflowing_conversion_is_no_match() {
        let big = huge('7', 28);
        assert_eq!(parse_speed(&format!("{big} mph")), None);
        assert_eq!(parse_speed(&format!("Mach {big}")), None);
        assert_eq!(parse_distance(&format!("{big} mi")), None);
        assert_eq!(parse_distance(&format!("{big} nmi")), None);
        assert_eq!(parse_fuel_volume(&format!("{big} US gal")), None);
        assert_eq!(parse_mass(&format!("{} t", huge('1', 26))), None);
    }

    #[test]
    fn test_huge_values_in_base_units_survive() {
        let big = huge('7', 28);
        assert!(parse_speed(&format!("{big} km/h")).is_some());
        assert!(parse_distance(&format!("{big} km")).is_some());
        assert!(parse_length(&format!("{big} ft")).is_some());
        assert!(parse_area(&format!("{big} sq ft")).is_some());
        assert!(parse_mass(&format!("{big} lb")).is_some());
        assert!(parse_volume(&format!("{big} cu ft")).is_some());
        assert!(parse_force(&format!("{big} lbf")).is_some());
    }

    #[test]
    fn test_too_many_digits_is_no_match() {
        let text = format!("{} km", huge('9', 40));
        assert_eq!(parse_distance(&text), None);
    }

    #[test]
    fn test_malformed_numbers_are_no_match() {
        assert_eq!(parse_speed("1.2.3 km/h"), None);
        assert_eq!(parse_speed("1.2.3 mph"), None);
        assert_eq!(parse_speed("Mach 1.2.3"), None);
        assert_eq!(parse_distance("1.2.3 km"), None);
        assert_eq!(parse_distance("1.2.3 nmi"), None);
        assert_eq!(parse_length("1.2.3 m"), None);
        assert_eq!(parse_area("1.2.3 m2"), None);
        assert_eq!(parse_mass("1.2.3 kg"), None);
        assert_eq!(parse_volume("1.2.3 m3"), None);
        assert_eq!(parse_fuel_volume("1.2.3 L"), None);
        assert_eq!(parse_force("1.2.3 kN"), None);
    }

    #[test]
    fn test_decimal_distance() {
        assert_eq!(parse_distance("12.5 km"), Some(dec!(12.5)));
    }

    #[test]
    fn test_hostile_input_never_panics() {
        let units = [
            Unit::Count,
            Unit::Speed,
            Unit::Distance,
            Unit::Length,
            Unit::Area,
            Unit::Mass,
            Unit::Volume,
            Unit::FuelVolume,
            Unit::Force,
            Unit::Text,
        ];
        let inputs = [
            String::new(),
            "...".to_string(),
            ",,, km".to_string(),
            "1.2.3 t".to_string(),
            "Mach .".to_string(),
            format!("{} kg", huge('9', 40)),
            format!("{} mph", huge('7', 28)),
            format!("{} US gal", huge('7', 28)),
            "[1][2]\u{a0}".to_string(),
        ];
        for unit in units {
            for input in &inputs {
                let _ = unit.parse(input);
            }
        }
    }

    #[test]
    fn test_unit_parse_wraps_values() {
        assert_eq!(Unit::Count.parse("2"), Some(FieldValue::Count(2)));
        assert_eq!(
            Unit::Text.parse("CFM56-5B[7]"),
            Some(FieldValue::Text("CFM56-5B".into()))
        );
        assert_eq!(
            Unit::Length.parse("100 ft"),
            Some(FieldValue::Quantity(dec!(30.48)))
        );
        assert_eq!(Unit::Force.parse("no thrust given"), None);
    }
}
