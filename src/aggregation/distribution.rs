//! Raw hour-difference distribution.

use rust_decimal::Decimal;

use crate::models::ReconciledPair;

/// Collects every computable hour difference, sorted ascending.
///
/// The result feeds histogram construction; binning is the renderer's
/// concern and is deliberately not done here. One-sided pairs carry no
/// difference and are excluded.
pub fn distribution(discrepancies: &[ReconciledPair]) -> Vec<Decimal> {
    let mut values: Vec<Decimal> = discrepancies
        .iter()
        .filter_map(|p| p.hour_difference)
        .collect();
    values.sort();
    values
}
