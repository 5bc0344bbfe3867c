//! Weighted percentile over (value, weight) pairs.

/// A value carrying an evidence weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedValue {
    pub value: f64,
    pub weight: f64,
}

/// Sort weighted values ascending by value (IEEE total order, NaN last).
pub fn sort_by_value(values: &mut [WeightedValue]) {
    values.sort_by(|a, b| a.value.total_cmp(&b.value));
}

/// Weighted percentile of an ascending-sorted slice.
///
/// Returns the first value whose cumulative weight reaches
/// `percentile / 100 * total_weight`. This is a step function: the result is
/// always one of the input values. An empty slice yields 0.0.
pub fn weighted_percentile(sorted: &[WeightedValue], percentile: f64) -> f64 {
    let Some(last) = sorted.last() else {
        return 0.0;
    };
    let total_weight: f64 = sorted.iter().map(|wv| wv.weight).sum();
    let target = (percentile / 100.0) * total_weight;

    let mut cumulative = 0.0;
    for wv in sorted {
        cumulative += wv.weight;
        if cumulative >= target {
            return wv.value;
        }
    }
    // Float accumulation can land a hair under the target at p100.
    last.value
}
