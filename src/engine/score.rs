//! Weighted aggregation of category scores into the 0-100 total.

use std::collections::BTreeMap;

use crate::engine::calibration::WeightTable;
use crate::engine::category::Category;
use crate::engine::result::CategoryResult;

/// Collapses per-category results into a single total.
///
/// Each category contributes its earned fraction times its weight. The
/// weighted sum is rounded half away from zero and clamped to [0, 100].
/// With the default weight table (weights equal to the ceilings) the
/// total is exactly the sum of the raw scores.
pub(crate) fn aggregate_total(
    categories: &BTreeMap<Category, CategoryResult>,
    weights: &WeightTable,
) -> u32 {
    let weighted: f64 = categories
        .values()
        .map(|result| result.ratio() * f64::from(weights.get(result.category)))
        .sum();
    weighted.round().clamp(0.0, 100.0) as u32
}
