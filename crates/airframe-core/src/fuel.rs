use crate::model::{CostBasis, ExtraFields, FieldKey, FuelModel};
use rust_decimal::Decimal;

/// Fuel cost per kilometre for one aircraft, rounded to two places.
///
/// Payload models bill by maximum payload, falling back to MTOW. When
/// neither is known (or reads zero) the seat count is billed instead, and an
/// aircraft with no seats and no payload costs nothing. A basis whose cost
/// overflows is treated as unknown.
pub fn fuel_cost_per_km(model: &FuelModel, seats: u32, extras: &ExtraFields) -> Decimal {
    let seats = Decimal::from(seats);
    let basis = match model.basis {
        CostBasis::Seats => seats,
        CostBasis::Payload => payload_basis(extras).unwrap_or(Decimal::ZERO),
    };

    let cost = [basis, seats]
        .into_iter()
        .filter(|b| *b > Decimal::ZERO)
        .find_map(|b| b.checked_mul(model.factor))
        .unwrap_or(Decimal::ZERO);

    let mut cost = cost.round_dp(2);
    cost.rescale(2);
    cost
}

fn payload_basis(extras: &ExtraFields) -> Option<Decimal> {
    [FieldKey::MaxPayloadKg, FieldKey::MtowKg]
        .into_iter()
        .filter_map(|key| extras.get(key).and_then(|v| v.as_decimal()))
        .find(|d| *d > Decimal::ZERO)
}
