use itertools::Itertools;
use ordered_float::OrderedFloat;

/// Linearly interpolated percentile (Excel `PERCENTILE.INC`), `pct` in `[0, 1]`.
/// Returns `None` for an empty slice.
pub fn calculate_percentile(v: &[f64], pct: f64) -> Option<f64> {
    debug_assert!((0.0..=1.0).contains(&pct), "percent must be between 0.0 and 1.0");
    if v.is_empty() {
        return None;
    }
    let sorted = v.iter().copied().sorted_by_key(|&x| OrderedFloat(x)).collect_vec();

    let n = sorted.len();
    // rank, 1-indexed: k = pct * (n - 1) + 1
    let k = pct * (n - 1) as f64 + 1.0;
    let lower_index = k.floor() as usize;
    let upper_index = k.ceil() as usize;
    let fraction = k - lower_index as f64;

    let lower_value = sorted[lower_index - 1];
    let upper_value = sorted[upper_index - 1];
    Some(lower_value + fraction * (upper_value - lower_value))
}

pub fn calculate_median(v: &[f64]) -> Option<f64> {
    calculate_percentile(v, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_odd_and_even() {
        assert_eq!(calculate_median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(calculate_median(&[4.0, 1.0, 2.0, 3.0]), Some(2.5));
    }

    #[test]
    fn percentile_bounds() {
        let v = [5.0, 1.0, 9.0];
        assert_eq!(calculate_percentile(&v, 0.0), Some(1.0));
        assert_eq!(calculate_percentile(&v, 1.0), Some(9.0));
    }

    #[test]
    fn empty_input() {
        assert_eq!(calculate_median(&[]), None);
    }
}
