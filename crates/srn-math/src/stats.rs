//! Summary statistics for trajectory and sampling analysis
//!
//! Small helpers used to check sampled priors and simulated trajectories
//! against their expected distributions, e.g. the stationary mean of a
//! birth-death process or the spread of an initial-condition prior.

use crate::Float;

// f64::sqrt is std-only; the trait supplies it when std is off
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Arithmetic mean; zero for empty data
pub fn mean(data: &[Float]) -> Float {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<Float>() / data.len() as Float
}

/// Sample variance (n − 1 denominator); zero for fewer than two samples
pub fn variance(data: &[Float]) -> Float {
    if data.len() < 2 {
        return 0.0;
    }

    let m = mean(data);
    let sum_sq_diff: Float = data.iter().map(|&x| (x - m) * (x - m)).sum();
    sum_sq_diff / (data.len() - 1) as Float
}

/// Sample standard deviation
pub fn std_dev(data: &[Float]) -> Float {
    variance(data).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[7.0]), 7.0);
    }

    #[test]
    fn test_variance() {
        // Var of 2,4,4,4,5,5,7,9 with n-1 denominator is 32/7
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance(&data) - 32.0 / 7.0).abs() < 1e-12);

        assert_eq!(variance(&[]), 0.0);
        assert_eq!(variance(&[3.0]), 0.0);
    }

    #[test]
    fn test_std_dev() {
        let data = [1.0, 1.0, 1.0];
        assert_eq!(std_dev(&data), 0.0);

        let data = [0.0, 2.0];
        assert!((std_dev(&data) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_mean_within_range(data in prop::collection::vec(-1e6f64..1e6, 1..100)) {
                let m = mean(&data);
                let lo = data.iter().copied().fold(Float::INFINITY, Float::min);
                let hi = data.iter().copied().fold(Float::NEG_INFINITY, Float::max);
                prop_assert!(m >= lo - 1e-6 && m <= hi + 1e-6);
            }

            #[test]
            fn prop_variance_nonnegative(data in prop::collection::vec(-1e6f64..1e6, 0..100)) {
                prop_assert!(variance(&data) >= 0.0);
            }
        }
    }
}
