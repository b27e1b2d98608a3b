//! Kernel parameters
//!
//! Some kernels default their bandwidth to the number of feature columns of
//! the first data they see (a variant of the libSVM heuristic). The value is
//! resolved once per kernel instance and then fixed.
//!
//! Constructors check their parameters with [`assert_positive`] when the
//! formula divides by them, and with [`assert_non_negative`] when they are
//! only exponents or rates.

use log::debug;
use std::sync::OnceLock;

/// Bandwidth that is either fixed at construction or resolved on first use
///
/// Resolution goes through a [`OnceLock`], so concurrent first calls agree on
/// a single value and every later call reads it without locking.
#[derive(Debug, Clone, Default)]
pub struct LazyScale {
    value: OnceLock<f64>,
}

impl LazyScale {
    /// A scale to be resolved from the first observed feature count
    pub fn unresolved() -> Self {
        Self {
            value: OnceLock::new(),
        }
    }

    /// A scale fixed up front
    pub fn fixed(value: f64) -> Self {
        Self {
            value: OnceLock::from(value),
        }
    }

    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or_else(Self::unresolved, Self::fixed)
    }

    /// The current value, `None` until resolved
    pub fn get(&self) -> Option<f64> {
        self.value.get().copied()
    }

    /// Return the scale, resolving it from `n_features` if still unset
    ///
    /// Zero columns resolve to 1.0 so the kernel formula stays finite.
    pub fn resolve(&self, kernel: &'static str, n_features: usize) -> f64 {
        *self.value.get_or_init(|| {
            let scale = n_features.max(1) as f64;
            debug!("{kernel} kernel: resolved default scale to {scale} from {n_features} features");
            scale
        })
    }
}

/// # Panics
/// Panics unless `value` is finite and strictly positive
pub fn assert_positive(name: &str, value: f64) {
    assert!(
        value > 0.0 && value.is_finite(),
        "{} must be positive and finite, got: {}",
        name,
        value
    );
}

/// # Panics
/// Panics unless `value` is finite and not negative
pub fn assert_non_negative(name: &str, value: f64) {
    assert!(
        value >= 0.0 && value.is_finite(),
        "{} must be non-negative and finite, got: {}",
        name,
        value
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_checks_accept_valid_values() {
        assert_positive("Sigma", 0.5);
        assert_non_negative("Degree", 0.0);
        assert_non_negative("Degree", 3.0);
    }

    #[test]
    #[should_panic(expected = "Sigma must be positive and finite, got: 0")]
    fn test_assert_positive_rejects_zero() {
        assert_positive("Sigma", 0.0);
    }

    #[test]
    #[should_panic(expected = "c must be positive and finite, got: inf")]
    fn test_assert_positive_rejects_infinity() {
        assert_positive("c", f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "Degree must be non-negative and finite, got: NaN")]
    fn test_assert_non_negative_rejects_nan() {
        assert_non_negative("Degree", f64::NAN);
    }

    #[test]
    fn test_unresolved_scale() {
        let scale = LazyScale::unresolved();
        assert_eq!(scale.get(), None);

        assert_eq!(scale.resolve("Test", 4), 4.0);
        assert_eq!(scale.get(), Some(4.0));

        // The first resolution wins
        assert_eq!(scale.resolve("Test", 9), 4.0);
    }

    #[test]
    fn test_fixed_scale_ignores_features() {
        let scale = LazyScale::fixed(0.5);
        assert_eq!(scale.get(), Some(0.5));
        assert_eq!(scale.resolve("Test", 10), 0.5);
    }

    #[test]
    fn test_zero_features_resolve_to_one() {
        let scale = LazyScale::unresolved();
        assert_eq!(scale.resolve("Test", 0), 1.0);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(LazyScale::from_option(None).get(), None);
        assert_eq!(LazyScale::from_option(Some(2.0)).get(), Some(2.0));
    }

    #[test]
    fn test_concurrent_resolution_agrees() {
        let scale = LazyScale::unresolved();

        let values: Vec<f64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| scale.resolve("Test", 3)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(values.iter().all(|&v| v == 3.0));
    }
}
