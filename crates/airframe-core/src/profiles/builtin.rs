use crate::error::AirframeError;
use crate::profiles::parse_catalog_str;
use crate::profiles::schema::Catalog;

const AIRLINERS_JSON: &str = include_str!("../../../../catalogs/airliners.json");

/// Available predefined catalogs.
pub const PRESETS: &[&str] = &["airliners"];

/// Load a predefined catalog by name.
pub fn load_preset(name: &str) -> Result<Catalog, AirframeError> {
    match name {
        "airliners" => parse_catalog_str(AIRLINERS_JSON),
        _ => Err(AirframeError::CatalogInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CostBasis, Role, Strategy};

    #[test]
    fn test_load_airliners_preset() {
        let catalog = load_preset("airliners").unwrap();
        assert_eq!(catalog.aircraft.len(), 22);
        assert_eq!(catalog.fuel_models.len(), 11);
    }

    #[test]
    fn test_freighters_use_payload_models() {
        let catalog = load_preset("airliners").unwrap();
        for profile in catalog.aircraft.iter().filter(|p| p.role == Role::Cargo) {
            assert!(profile.seat_keywords.is_empty(), "{}", profile.id);
            assert_eq!(profile.default_seats, Some(0));
            let model = catalog.fuel_model(&profile.fuel_model).unwrap();
            assert_eq!(model.basis, CostBasis::Payload);
        }
    }

    #[test]
    fn test_list_profiles() {
        let catalog = load_preset("airliners").unwrap();
        let list: Vec<_> = catalog
            .aircraft
            .iter()
            .filter(|p| p.strategy == Strategy::List)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(list, vec!["B737-700", "B737-800", "A350-900"]);
    }

    #[test]
    fn test_ranked_order() {
        let catalog = load_preset("airliners").unwrap();
        let ranked = catalog.ranked();
        assert_eq!(ranked.first().map(|p| p.id.as_str()), Some("ATR72"));
        assert_eq!(ranked.last().map(|p| p.id.as_str()), Some("A380-800"));
    }

    #[test]
    fn test_unknown_preset() {
        assert!(load_preset("bizjets").is_err());
    }
}
