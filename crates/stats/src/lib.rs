//! Statistical helper functions for the rainsim generator and aggregator.

/// Rounds `value` to `decimals` decimal places.
///
/// Rounding is decided on the exact decimal expansion of `value`, not on
/// `value * 10^decimals`, which can itself round onto a half. A value that
/// is exactly halfway between two candidates rounds away from zero.
/// Non-finite values are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals as i32);
    if let Some(twice) = exact_double_scaled(value, 2.0 * scale) {
        // An odd integer here means `value` sits exactly on a half.
        if twice % 2.0 != 0.0 {
            let away = (twice.abs() + 1.0) / 2.0;
            return away.copysign(value) / scale;
        }
    }
    let formatted = format!("{value:.prec$}", prec = decimals as usize);
    formatted.parse().unwrap_or(value)
}

/// `value * factor` when the product is an exactly representable integer.
fn exact_double_scaled(value: f64, factor: f64) -> Option<f64> {
    let product = value * factor;
    let exact = product.is_finite() && value.mul_add(factor, -product) == 0.0;
    (exact && product.fract() == 0.0).then_some(product)
}

/// Rounds `value` to one decimal place (the precision used for rainfall in mm).
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}

/// Sequential left-to-right sum. Returns 0.0 if empty.
pub fn sum(data: &[f64]) -> f64 {
    data.iter().fold(0.0, |acc, &x| acc + x)
}

/// Arithmetic mean of a slice. Returns `None` if empty.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(sum(data) / data.len() as f64)
}

/// Indices of `data` ordered by value, largest first.
///
/// The sort is stable: equal values keep their original relative order, so
/// the first index is always the earliest occurrence of the maximum. NaN is
/// ordered above every finite value by `f64::total_cmp`; callers are expected
/// to pass finite data.
pub fn rank_descending(data: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..data.len()).collect();
    idx.sort_by(|&a, &b| data[b].total_cmp(&data[a]));
    idx
}

/// Index of the earliest maximum, or `None` if empty.
pub fn first_max_index(data: &[f64]) -> Option<usize> {
    rank_descending(data).first().copied()
}

/// Number of values exactly equal to zero.
pub fn count_zero(data: &[f64]) -> usize {
    data.iter().filter(|&&x| x == 0.0).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round1() {
        assert_relative_eq!(round1(0.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(round1(2.44), 2.4, epsilon = 1e-12);
        assert_relative_eq!(round1(2.46), 2.5, epsilon = 1e-12);
        assert_relative_eq!(round1(4.98), 5.0, epsilon = 1e-12);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_round1_uses_exact_value() {
        // 0.7 / 2.0 is 0.349999..., just below the half.
        assert_eq!(round1(0.7 / 2.0), 0.3);
        // 1.45 is stored as 1.4499999999999999556.
        assert_eq!(round1(1.45), 1.4);
        assert_eq!(round1(2.675), 2.7);
    }

    #[test]
    fn test_round1_exact_halves_away_from_zero() {
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(0.75), 0.8);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn test_round1_non_finite_passthrough() {
        assert!(round1(f64::NAN).is_nan());
        assert_eq!(round1(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_round_to_decimals() {
        assert_relative_eq!(round_to(3.14159, 2), 3.14, epsilon = 1e-12);
        assert_relative_eq!(round_to(3.14159, 0), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_never_negative_for_small_positive() {
        assert_eq!(round1(0.04), 0.0);
        assert!(round1(0.04).is_sign_positive());
    }

    #[test]
    fn test_sum() {
        assert_relative_eq!(sum(&[0.5, 0.5, 0.5]), 1.5, epsilon = 1e-12);
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&data).unwrap(), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_empty() {
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn test_rank_descending_stable() {
        let data = [1.0, 3.0, 2.0, 3.0, 0.0];
        assert_eq!(rank_descending(&data), vec![1, 3, 2, 0, 4]);
    }

    #[test]
    fn test_first_max_index_ties() {
        assert_eq!(first_max_index(&[0.0, 0.0, 0.0]), Some(0));
        assert_eq!(first_max_index(&[1.0, 5.0, 5.0]), Some(1));
        assert_eq!(first_max_index(&[]), None);
    }

    #[test]
    fn test_count_zero() {
        assert_eq!(count_zero(&[0.0, 0.1, 0.0, 2.0]), 2);
        assert_eq!(count_zero(&[]), 0);
    }
}
