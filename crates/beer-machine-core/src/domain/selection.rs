//! Selector - picks the beer style that best suits a temperature.
//!
//! Rules:
//! 1. The style whose average serving temperature is closest to the target wins.
//! 2. Exact ties on distance go to the lexicographically smallest name
//!    (byte-wise `str` ordering, not locale-aware).
//!
//! Input order never decides between distinct names.

use std::cmp::Ordering;

use super::errors::BeerError;
use super::style::BeerStyle;

/// Select the best style for `target_temp`.
///
/// Returns a clone of one of the given styles, or
/// [`BeerError::EmptyStyleList`] when there is nothing to choose from.
pub fn select_best(styles: &[BeerStyle], target_temp: f64) -> Result<BeerStyle, BeerError> {
    styles
        .iter()
        .map(|style| (style.distance_to(target_temp), style))
        .min_by(|(da, a), (db, b)| compare_candidates(*da, a, *db, b))
        .map(|(_, style)| style.clone())
        .ok_or(BeerError::EmptyStyleList)
}

// total_cmp keeps the order total when the target is NaN; NaN distances
// sort after every real distance.
fn compare_candidates(da: f64, a: &BeerStyle, db: f64, b: &BeerStyle) -> Ordering {
    da.total_cmp(&db).then_with(|| a.name().cmp(b.name()))
}
