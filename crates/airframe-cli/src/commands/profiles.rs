use airframe_core::error::AirframeError;
use airframe_core::fields::FIELD_REGISTRY;
use airframe_core::model::{CostBasis, Role, Strategy};
use airframe_core::profiles::schema::Catalog;
use std::path::Path;

use crate::commands::CatalogArg;

pub fn list(catalog: CatalogArg) -> Result<(), AirframeError> {
    let catalog = catalog.load()?;

    println!("{} (v{})", catalog.name, catalog.version);
    if let Some(ref desc) = catalog.description {
        println!("{}", desc);
    }
    println!();

    let id_width = catalog
        .aircraft
        .iter()
        .map(|p| p.id.len())
        .max()
        .unwrap_or(8);

    for profile in catalog.ranked() {
        let cargo = if profile.role == Role::Cargo { " [cargo]" } else { "" };
        println!(
            "  {:>3}  {:<width$}  {:<10}  {:<5}  {}{}",
            profile.rank,
            profile.id,
            profile.class,
            profile.strategy,
            profile.name,
            cargo,
            width = id_width
        );
    }
    println!();

    Ok(())
}

pub fn explain(id: &str, catalog: CatalogArg) -> Result<(), AirframeError> {
    let catalog = catalog.load()?;
    let profile = catalog
        .profile(id)
        .ok_or_else(|| AirframeError::UnknownAircraft(id.to_string()))?;

    println!("{} ({})\n", profile.name, profile.id);
    println!("  Article:     {}", profile.document);
    println!("  Class:       {}", profile.class);
    println!("  Role:        {}", profile.role);
    println!("  Rank:        {}", profile.rank);
    println!();

    match profile.strategy {
        Strategy::Table => {
            println!("Read from the first table that has a seat row, a range row and at");
            println!("least two columns.");
            match profile.variant_column.as_deref() {
                Some(variant) => println!("Values come from the column whose header contains '{}'.", variant),
                None => println!("Values come from the last column."),
            }
        }
        Strategy::List => {
            println!("Read from bulleted items that start with a bold label.");
        }
    }
    println!();

    print_keywords("Seats", &profile.seat_keywords);
    print_keywords("Range", &profile.range_keywords);
    print_keywords("Cruise", &profile.cruise_keywords);
    if let Some(seats) = profile.default_seats {
        println!("  Default seats: {}", seats);
    }
    println!();

    if let Some(model) = catalog.fuel_model(&profile.fuel_model) {
        let basis = match model.basis {
            CostBasis::Seats => "seat",
            CostBasis::Payload => "kg of max payload (MTOW if unknown)",
        };
        println!(
            "Fuel cost: {} per {} per km ('{}')",
            model.factor, basis, profile.fuel_model
        );
    }
    if let Some(minutes) = catalog.turnaround(profile.class) {
        println!("Turnaround: {} min", minutes);
    }
    if profile.role == Role::Cargo {
        println!("\nFreighter: seats are published as 0 and per-cabin seat counts are dropped.");
    }
    println!();

    Ok(())
}

fn print_keywords(label: &str, keywords: &[String]) {
    if keywords.is_empty() {
        println!("  {:<7} (none)", label);
    } else {
        println!("  {:<7} {}", label, keywords.join(", "));
    }
}

pub fn validate(file: &Path) -> Result<(), AirframeError> {
    let catalog = airframe_core::profiles::load_catalog(file)?;

    println!("Catalog '{}' (v{}) is valid.", catalog.name, catalog.version);
    println!("  Aircraft: {}", catalog.aircraft.len());
    println!("  Fuel models: {}", catalog.fuel_models.len());

    let warnings = lint(&catalog);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

/// Things that load fine but are probably mistakes.
fn lint(catalog: &Catalog) -> Vec<String> {
    let mut warnings = Vec::new();

    for profile in &catalog.aircraft {
        if profile.strategy == Strategy::List && profile.variant_column.is_some() {
            warnings.push(format!(
                "aircraft '{}' uses the list strategy; variant_column is ignored",
                profile.id
            ));
        }
        if profile.role == Role::Cargo && !profile.seat_keywords.is_empty() {
            warnings.push(format!(
                "freighter '{}' has seat keywords; its seats are always published as 0",
                profile.id
            ));
        }
    }

    for name in catalog.fuel_models.keys() {
        if !catalog.aircraft.iter().any(|p| &p.fuel_model == name) {
            warnings.push(format!("fuel model '{}' is not used by any aircraft", name));
        }
    }

    warnings
}

pub fn fields() -> Result<(), AirframeError> {
    println!("Optional fields, in output order:\n");
    for def in FIELD_REGISTRY {
        print!("  {:<20} {}", def.key.as_str(), def.keywords.join(", "));
        if !def.exclude.is_empty() {
            print!("  (not: {})", def.exclude.join(", "));
        }
        println!();
    }
    println!("\nA field is omitted when its value is zero or blank.");
    Ok(())
}
