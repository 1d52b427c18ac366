//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! The CDF is evaluated through `libm::erfc`, which stays accurate to
//! machine precision in both tails where `1 - erf` would cancel.

use std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Accuracy
/// Within 1e-15 absolute for all finite x; saturates to exactly 0 or 1
/// for |x| beyond about 38.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0) - 0.841_344_746_068_542_9).abs() < 1e-12);
/// assert_eq!(norm_cdf(f64::INFINITY), 1.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.398_942_280_4).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // norm_cdf tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_at_zero() {
        assert_eq!(norm_cdf(0.0), 0.5);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        let test_values = [-6.0, -3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0, 6.0];
        for x in test_values {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_cdf_reference_values() {
        // Reference values to 16 significant digits
        assert_relative_eq!(norm_cdf(1.0), 0.841_344_746_068_542_9, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-1.0), 0.158_655_253_931_457_05, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(2.0), 0.977_249_868_051_820_8, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-2.0), 0.022_750_131_948_179_195, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(3.0), 0.998_650_101_968_369_9, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(1.959_963_984_540_054), 0.975, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_lower_tail_relative_accuracy() {
        // Φ(-8) ≈ 6.220960574271785e-16; 1 - erf would lose this entirely
        assert_relative_eq!(norm_cdf(-8.0), 6.220_960_574_271_785e-16, max_relative = 1e-10);
        // Φ(-10) ≈ 7.619853024160527e-24
        assert_relative_eq!(norm_cdf(-10.0), 7.619_853_024_160_527e-24, max_relative = 1e-10);
    }

    #[test]
    fn test_norm_cdf_saturates_without_nan() {
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
        assert_eq!(norm_cdf(1e6), 1.0);
        assert_eq!(norm_cdf(-1e6), 0.0);
    }

    #[test]
    fn test_norm_cdf_monotonic() {
        let mut prev = 0.0;
        for i in -800..=800 {
            let x = i as f64 / 100.0;
            let cdf = norm_cdf(x);
            assert!(cdf >= prev, "Φ not monotonic at x = {}", x);
            prev = cdf;
        }
    }

    // ==========================================================
    // norm_pdf tests
    // ==========================================================

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0), FRAC_1_SQRT_2PI, epsilon = 1e-16);
        assert_relative_eq!(norm_pdf(1.0), 0.241_970_724_519_143_37, epsilon = 1e-15);
        assert_relative_eq!(norm_pdf(-1.0), norm_pdf(1.0), epsilon = 1e-16);
    }

    #[test]
    fn test_norm_pdf_vanishes_at_infinity() {
        assert_eq!(norm_pdf(f64::INFINITY), 0.0);
        assert_eq!(norm_pdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_norm_pdf_is_derivative_of_cdf() {
        let h = 1e-5;
        for x in [-2.0, -0.7, 0.0, 0.3, 1.5] {
            let numeric = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(numeric, norm_pdf(x), epsilon = 1e-9);
        }
    }
}
