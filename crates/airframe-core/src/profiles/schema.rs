use crate::model::{AircraftClass, FuelModel, Role, Strategy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A set of aircraft profiles plus the balance tables they reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Turnaround time on the ground per size class.
    pub turnaround_minutes: BTreeMap<AircraftClass, u32>,
    /// Named fuel-cost models referenced by `AircraftProfile::fuel_model`.
    pub fuel_models: BTreeMap<String, FuelModel>,
    pub aircraft: Vec<AircraftProfile>,
}

impl Catalog {
    pub fn profile(&self, id: &str) -> Option<&AircraftProfile> {
        self.aircraft.iter().find(|p| p.id == id)
    }

    pub fn fuel_model(&self, name: &str) -> Option<&FuelModel> {
        self.fuel_models.get(name)
    }

    pub fn turnaround(&self, class: AircraftClass) -> Option<u32> {
        self.turnaround_minutes.get(&class).copied()
    }

    /// Profiles in publication order. Equal ranks keep declaration order.
    pub fn ranked(&self) -> Vec<&AircraftProfile> {
        let mut profiles: Vec<&AircraftProfile> = self.aircraft.iter().collect();
        profiles.sort_by_key(|p| p.rank);
        profiles
    }
}

/// Which article describes an aircraft and how to read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub id: String,
    pub name: String,
    /// Article identifier, appended to the source base URL.
    pub document: String,
    pub class: AircraftClass,
    pub fuel_model: String,
    pub rank: u32,
    pub strategy: Strategy,
    #[serde(default)]
    pub role: Role,
    /// Header text (or part of it) of the column holding this variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_column: Option<String>,
    #[serde(default = "default_seat_keywords")]
    pub seat_keywords: Vec<String>,
    #[serde(default = "default_range_keywords")]
    pub range_keywords: Vec<String>,
    #[serde(default = "default_cruise_keywords")]
    pub cruise_keywords: Vec<String>,
    /// Seat count to use when no seat row is expected (freighters).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_seats: Option<u32>,
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

pub fn default_seat_keywords() -> Vec<String> {
    keywords(&["seating", "3-class", "2-class", "passenger", "capacity", "max"])
}

pub fn default_range_keywords() -> Vec<String> {
    keywords(&["range"])
}

pub fn default_cruise_keywords() -> Vec<String> {
    keywords(&["cruise", "cruising", "speed"])
}
