//! Chi-Square Kernel Implementations
//!
//! Chi-square kernels compare histogram and distribution data. Both variants
//! here are from Vedaldi and Zisserman, "Efficient Additive Kernels via
//! Explicit Feature Maps":
//!
//! Additive χ²:  K(x, y) = Σᵢ 2 xᵢ yᵢ / (xᵢ + yᵢ)
//! χ²:           K(x, y) = exp(-γ Σᵢ (xᵢ - yᵢ)² / (xᵢ + yᵢ))
//!
//! Both are only defined for non-negative data and reject negative inputs
//! before computing anything. A feature where xᵢ + yᵢ = 0 contributes 0.

use crate::core::{Dimensionality, KernelCategory, Matrix, Result};
use crate::kernel::columns::{ensure_non_negative, sum_over_features};
use crate::kernel::param::assert_non_negative;
use crate::kernel::traits::Kernel;
use ndarray::ArrayView2;

/// Additive chi-square kernel: K(x, y) = Σᵢ 2 xᵢ yᵢ / (xᵢ + yᵢ)
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveChi2Kernel;

impl AdditiveChi2Kernel {
    /// Creates a new additive chi-square kernel
    ///
    /// # Examples
    /// ```
    /// use ndarray::array;
    /// use rskernels::kernel::{AdditiveChi2Kernel, Kernel};
    ///
    /// let kernel = AdditiveChi2Kernel::new();
    /// let k = kernel
    ///     .compute(array![[1.0, 2.0]].view(), array![[2.0, 4.0]].view())
    ///     .unwrap();
    /// assert!((k[[0, 0]] - 4.0).abs() < 1e-12);
    ///
    /// // Negative values are rejected
    /// assert!(kernel
    ///     .compute(array![[-1.0, 2.0]].view(), array![[2.0, 4.0]].view())
    ///     .is_err());
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Kernel for AdditiveChi2Kernel {
    fn name(&self) -> &'static str {
        "AdditiveChi2"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        ensure_non_negative(self.name(), data_1)?;
        ensure_non_negative(self.name(), data_2)?;

        Ok(sum_over_features(data_1, data_2, |x, y| {
            let sum = x + y;
            if sum > 0.0 {
                2.0 * x * y / sum
            } else {
                0.0
            }
        }))
    }

    fn dim(&self) -> Dimensionality {
        Dimensionality::Unknown
    }

    fn category(&self) -> KernelCategory {
        KernelCategory::PositiveOnly
    }
}

/// Chi-square kernel: K(x, y) = exp(-γ Σᵢ (xᵢ - yᵢ)² / (xᵢ + yᵢ))
#[derive(Debug, Clone, Copy)]
pub struct Chi2Kernel {
    /// Scaling parameter gamma (non-negative)
    gamma: f64,
}

impl Chi2Kernel {
    /// Creates a new chi-square kernel with the specified gamma parameter
    ///
    /// # Arguments
    /// * `gamma` - Scaling parameter for the chi-square distance
    ///
    /// # Panics
    /// Panics if gamma is negative or not finite
    ///
    /// # Examples
    /// ```
    /// use rskernels::kernel::Chi2Kernel;
    ///
    /// // Standard chi-square kernel
    /// let kernel = Chi2Kernel::new(1.0);
    /// assert_eq!(kernel.gamma(), 1.0);
    ///
    /// // More sensitive to differences
    /// let sensitive_kernel = Chi2Kernel::new(10.0);
    /// assert_eq!(sensitive_kernel.gamma(), 10.0);
    /// ```
    pub fn new(gamma: f64) -> Self {
        assert_non_negative("Gamma", gamma);
        Self { gamma }
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for Chi2Kernel {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Kernel for Chi2Kernel {
    fn name(&self) -> &'static str {
        "Chi2"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        ensure_non_negative(self.name(), data_1)?;
        ensure_non_negative(self.name(), data_2)?;

        let mut kernel = sum_over_features(data_1, data_2, chi_square_term);
        let gamma = self.gamma;
        kernel.mapv_inplace(|distance| (-gamma * distance).exp());
        Ok(kernel)
    }

    fn dim(&self) -> Dimensionality {
        Dimensionality::Unknown
    }

    fn category(&self) -> KernelCategory {
        KernelCategory::PositiveOnly
    }
}

/// (x - y)² / (x + y), taken as 0 when both values are 0
fn chi_square_term(x: f64, y: f64) -> f64 {
    let sum = x + y;
    if sum > 0.0 {
        let diff = x - y;
        diff * diff / sum
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KernelError;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_additive_chi2_values() {
        let kernel = AdditiveChi2Kernel::new();
        let k = kernel
            .compute(array![[1.0, 2.0]].view(), array![[2.0, 4.0]].view())
            .unwrap();

        // 2·1·2/3 + 2·2·4/6 = 4/3 + 8/3
        assert_relative_eq!(k[[0, 0]], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_additive_chi2_with_zeros() {
        let kernel = AdditiveChi2Kernel::new();
        let k = kernel
            .compute(array![[0.0, 3.0]].view(), array![[0.0, 3.0], [5.0, 0.0]].view())
            .unwrap();

        // Both-zero features contribute nothing; x = y gives x
        assert_relative_eq!(k[[0, 0]], 3.0, epsilon = 1e-12);
        assert_relative_eq!(k[[0, 1]], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_chi2_identical_histograms() {
        let kernel = Chi2Kernel::default();
        let x = array![[10.0, 20.0, 30.0]];

        let k = kernel.gram(x.view()).unwrap();
        assert_relative_eq!(k[[0, 0]], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_chi2_different_histograms() {
        let kernel = Chi2Kernel::new(0.5);
        let x = array![[10.0, 20.0, 30.0]];
        let y = array![[15.0, 10.0, 35.0]];

        // 25/25 + 100/30 + 25/65
        let distance: f64 = 1.0 + 10.0 / 3.0 + 5.0 / 13.0;
        let k = kernel.compute(x.view(), y.view()).unwrap();
        assert_relative_eq!(k[[0, 0]], (-0.5 * distance).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_chi2_gamma_effect() {
        let x = array![[10.0, 20.0]];
        let y = array![[15.0, 25.0]];

        let k_1 = Chi2Kernel::new(1.0).compute(x.view(), y.view()).unwrap();
        let k_2 = Chi2Kernel::new(2.0).compute(x.view(), y.view()).unwrap();
        assert!(k_2[[0, 0]] < k_1[[0, 0]]);
    }

    #[test]
    fn test_negative_input_rejected() {
        let positive = array![[1.0, 1.0]];
        let negative = array![[1.0, -3.0]];

        let err = AdditiveChi2Kernel::new()
            .compute(negative.view(), positive.view())
            .unwrap_err();
        assert_eq!(
            err,
            KernelError::DomainViolation {
                kernel: "AdditiveChi2",
                value: -3.0
            }
        );

        let err = Chi2Kernel::default()
            .compute(positive.view(), negative.view())
            .unwrap_err();
        assert!(matches!(err, KernelError::DomainViolation { kernel: "Chi2", .. }));
    }

    #[test]
    fn test_category() {
        assert_eq!(AdditiveChi2Kernel::new().category(), KernelCategory::PositiveOnly);
        assert_eq!(Chi2Kernel::default().category(), KernelCategory::PositiveOnly);
    }

    #[test]
    #[should_panic(expected = "Gamma must be non-negative")]
    fn test_invalid_gamma() {
        Chi2Kernel::new(-1.0);
    }
}
