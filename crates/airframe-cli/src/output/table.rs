use airframe_core::batch::BatchOutcome;
use airframe_core::model::{OutputRecord, Role};

pub fn print(outcome: &BatchOutcome) {
    if outcome.records.is_empty() {
        println!("No aircraft extracted.");
        return;
    }

    let id_width = outcome
        .records
        .iter()
        .map(|r| r.id.len())
        .max()
        .unwrap_or(8)
        .max(2);

    println!(
        "  {:<width$}  {:>6}  {:>9}  {:>8}  {:>5}  {:>9}  {:<9}",
        "ID",
        "Seats",
        "Range km",
        "Cruise",
        "Turn",
        "Fuel/km",
        "Role",
        width = id_width
    );
    println!("  {}", "-".repeat(id_width + 60));

    for record in &outcome.records {
        println!(
            "  {:<width$}  {:>6}  {:>9}  {:>8}  {:>5}  {:>9}  {:<9}",
            record.id,
            seats_cell(record),
            record.range_km.to_string(),
            record.cruise_kmh.to_string(),
            record.turnaround_min,
            record.fuel_cost_per_km.to_string(),
            record.role.to_string(),
            width = id_width
        );
    }
    println!();
}

/// One record with all of its optional fields.
pub fn print_record(record: &OutputRecord) {
    println!("=== {} ({}) ===\n", record.name, record.id);
    println!("  {:<20} {}", "seats", seats_cell(record));
    println!("  {:<20} {}", "range_km", record.range_km);
    println!("  {:<20} {}", "cruise_kmh", record.cruise_kmh);
    println!("  {:<20} {}", "role", record.role);
    println!("  {:<20} {}", "turnaround_min", record.turnaround_min);
    for (key, value) in record.extras.iter() {
        println!("  {:<20} {}", key.as_str(), value);
    }
    println!("  {:<20} {}", "fuel_cost_per_km", record.fuel_cost_per_km);
    println!();
}

fn seats_cell(record: &OutputRecord) -> String {
    match record.role {
        Role::Cargo => "-".to_string(),
        Role::Passenger => record.seats.to_string(),
    }
}
