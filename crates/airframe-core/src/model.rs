use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Passenger,
    Cargo,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Passenger => write!(f, "passenger"),
            Role::Cargo => write!(f, "cargo"),
        }
    }
}

/// Where the performance figures live in the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Table,
    List,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Table => write!(f, "table"),
            Strategy::List => write!(f, "list"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AircraftClass {
    Regional,
    Narrowbody,
    Widebody,
    Jumbo,
}

impl fmt::Display for AircraftClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AircraftClass::Regional => write!(f, "regional"),
            AircraftClass::Narrowbody => write!(f, "narrowbody"),
            AircraftClass::Widebody => write!(f, "widebody"),
            AircraftClass::Jumbo => write!(f, "jumbo"),
        }
    }
}

/// What a fuel model multiplies its factor by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostBasis {
    Seats,
    Payload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuelModel {
    pub basis: CostBasis,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub factor: Decimal,
}

/// Canonical keys of the optional fields a record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Crew,
    ThreeClassSeats,
    TwoClassSeats,
    OneClassMaxSeats,
    CargoVolumeM3,
    MtowKg,
    MaxPayloadKg,
    OewKg,
    FuelCapacityL,
    LengthM,
    WingspanM,
    HeightM,
    WingAreaM2,
    EngineType,
    EngineThrustKn,
    ServiceCeilingM,
    MaxSpeedKmh,
    TakeoffDistanceM,
    LandingDistanceM,
    IcaoType,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Crew => "crew",
            FieldKey::ThreeClassSeats => "three_class_seats",
            FieldKey::TwoClassSeats => "two_class_seats",
            FieldKey::OneClassMaxSeats => "one_class_max_seats",
            FieldKey::CargoVolumeM3 => "cargo_volume_m3",
            FieldKey::MtowKg => "mtow_kg",
            FieldKey::MaxPayloadKg => "max_payload_kg",
            FieldKey::OewKg => "oew_kg",
            FieldKey::FuelCapacityL => "fuel_capacity_l",
            FieldKey::LengthM => "length_m",
            FieldKey::WingspanM => "wingspan_m",
            FieldKey::HeightM => "height_m",
            FieldKey::WingAreaM2 => "wing_area_m2",
            FieldKey::EngineType => "engine_type",
            FieldKey::EngineThrustKn => "engine_thrust_kn",
            FieldKey::ServiceCeilingM => "service_ceiling_m",
            FieldKey::MaxSpeedKmh => "max_speed_kmh",
            FieldKey::TakeoffDistanceM => "takeoff_distance_m",
            FieldKey::LandingDistanceM => "landing_distance_m",
            FieldKey::IcaoType => "icao_type",
        }
    }

    /// Per-cabin seat counts, meaningless for freighters.
    pub fn is_cabin_seating(&self) -> bool {
        matches!(
            self,
            FieldKey::ThreeClassSeats | FieldKey::TwoClassSeats | FieldKey::OneClassMaxSeats
        )
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Count(u32),
    Quantity(Decimal),
    Text(String),
}

impl FieldValue {
    /// Zero and blank values mean "present but unreadable" and are never kept.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Count(n) => *n == 0,
            FieldValue::Quantity(d) => d.is_zero(),
            FieldValue::Text(s) => s.trim().is_empty(),
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            FieldValue::Count(n) => Some(Decimal::from(*n)),
            FieldValue::Quantity(d) => Some(*d),
            FieldValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Count(n) => write!(f, "{n}"),
            FieldValue::Quantity(d) => write!(f, "{d}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Count(n) => serializer.serialize_u32(*n),
            FieldValue::Quantity(d) => Exact(d).serialize(serializer),
            FieldValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Optional fields in registry order, at most one value per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraFields(Vec<(FieldKey, FieldValue)>);

impl ExtraFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: FieldKey, value: FieldValue) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: FieldKey) -> Option<&FieldValue> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(FieldKey) -> bool) {
        self.0.retain(|(k, _)| keep(*k));
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &FieldValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What an extractor pulls out of one document before assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub seats: u32,
    pub range_km: Decimal,
    pub cruise_kmh: Decimal,
    pub extras: ExtraFields,
}

/// One aircraft in the published dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub id: String,
    pub name: String,
    pub range_km: Decimal,
    pub seats: u32,
    pub cruise_kmh: Decimal,
    pub role: Role,
    pub turnaround_min: u32,
    pub extras: ExtraFields,
    pub fuel_cost_per_km: Decimal,
    /// Catalog rank; orders the dataset but is not published.
    pub rank: u32,
}

/// A decimal written as a JSON number with its scale intact (`6100.0`, `4.00`).
struct Exact<'a>(&'a Decimal);

impl Serialize for Exact<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(self.0, serializer)
    }
}

impl Serialize for OutputRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(8 + self.extras.len()))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("range_km", &Exact(&self.range_km))?;
        map.serialize_entry("seats", &self.seats)?;
        map.serialize_entry("cruise_kmh", &Exact(&self.cruise_kmh))?;
        map.serialize_entry("role", &self.role)?;
        map.serialize_entry("turnaround_min", &self.turnaround_min)?;
        for (key, value) in self.extras.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.serialize_entry("fuel_cost_per_km", &Exact(&self.fuel_cost_per_km))?;
        map.end()
    }
}
