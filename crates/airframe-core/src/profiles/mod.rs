pub mod builtin;
pub mod schema;

use crate::error::AirframeError;
use crate::model::Role;
use schema::Catalog;
use std::collections::HashSet;
use std::path::Path;

/// Load a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog, AirframeError> {
    let content = std::fs::read_to_string(path).map_err(|e| AirframeError::CatalogLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_catalog(&content, path)
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str, source: &Path) -> Result<Catalog, AirframeError> {
    let catalog: Catalog = serde_json::from_str(json).map_err(|e| AirframeError::CatalogLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Parse a catalog from a JSON string (no file path context).
pub fn parse_catalog_str(json: &str) -> Result<Catalog, AirframeError> {
    let catalog: Catalog = serde_json::from_str(json).map_err(AirframeError::Json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed and every reference resolves.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), AirframeError> {
    if catalog.aircraft.is_empty() {
        return Err(AirframeError::CatalogInvalid(
            "aircraft must not be empty".into(),
        ));
    }

    for (name, model) in &catalog.fuel_models {
        if model.factor.is_sign_negative() || model.factor.is_zero() {
            return Err(AirframeError::CatalogInvalid(format!(
                "fuel model '{}' must have a positive factor",
                name
            )));
        }
    }

    let mut seen = HashSet::new();
    for profile in &catalog.aircraft {
        if profile.id.trim().is_empty() {
            return Err(AirframeError::CatalogInvalid(
                "aircraft id must not be empty".into(),
            ));
        }

        if !seen.insert(profile.id.as_str()) {
            return Err(AirframeError::CatalogInvalid(format!(
                "duplicate aircraft id '{}'",
                profile.id
            )));
        }

        if profile.document.trim().is_empty() {
            return Err(AirframeError::CatalogInvalid(format!(
                "aircraft '{}' has no document",
                profile.id
            )));
        }

        if catalog.fuel_model(&profile.fuel_model).is_none() {
            return Err(AirframeError::CatalogInvalid(format!(
                "aircraft '{}' references unknown fuel model '{}'",
                profile.id, profile.fuel_model
            )));
        }

        if catalog.turnaround(profile.class).is_none() {
            return Err(AirframeError::CatalogInvalid(format!(
                "aircraft '{}' has class '{}' with no turnaround time",
                profile.id, profile.class
            )));
        }

        if profile.range_keywords.is_empty() || profile.cruise_keywords.is_empty() {
            return Err(AirframeError::CatalogInvalid(format!(
                "aircraft '{}' needs range and cruise keywords",
                profile.id
            )));
        }

        if profile.role == Role::Passenger
            && profile.seat_keywords.is_empty()
            && profile.default_seats.is_none()
        {
            return Err(AirframeError::CatalogInvalid(format!(
                "passenger aircraft '{}' needs seat keywords or default_seats",
                profile.id
            )));
        }
    }

    Ok(())
}
