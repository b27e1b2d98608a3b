//! Histogram Intersection Kernel Implementations
//!
//! The Histogram Intersection (min) kernel measures the overlap between two
//! histograms:
//!
//! K(x, y) = Σᵢ min(xᵢ, yᵢ)
//!
//! It is only meaningful for non-negative data. The generalized variant of
//! Boughorbel, Tarel and Boujemaa ("Generalized histogram intersection kernel
//! for image recognition") lifts that restriction by intersecting |xᵢ|^α and
//! |yᵢ|^α instead:
//!
//! K(x, y) = Σᵢ min(|xᵢ|^α, |yᵢ|^α)

use crate::core::{Dimensionality, KernelCategory, Matrix, Result};
use crate::kernel::columns::{ensure_non_negative, sum_over_features};
use crate::kernel::param::assert_non_negative;
use crate::kernel::traits::Kernel;
use ndarray::ArrayView2;

/// Histogram intersection kernel: K(x, y) = Σᵢ min(xᵢ, yᵢ)
#[derive(Debug, Clone, Copy, Default)]
pub struct MinKernel;

impl MinKernel {
    /// Creates a new histogram intersection kernel
    ///
    /// # Examples
    /// ```
    /// use ndarray::array;
    /// use rskernels::kernel::{Kernel, MinKernel};
    ///
    /// let kernel = MinKernel::new();
    /// let k = kernel
    ///     .compute(array![[10.0, 20.0]].view(), array![[15.0, 5.0]].view())
    ///     .unwrap();
    /// assert_eq!(k[[0, 0]], 15.0);
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl Kernel for MinKernel {
    fn name(&self) -> &'static str {
        "Min"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        ensure_non_negative(self.name(), data_1)?;
        ensure_non_negative(self.name(), data_2)?;

        Ok(intersection(data_1, data_2))
    }

    fn dim(&self) -> Dimensionality {
        Dimensionality::Unknown
    }

    fn category(&self) -> KernelCategory {
        KernelCategory::PositiveOnly
    }
}

/// Generalized histogram intersection: K(x, y) = Σᵢ min(|xᵢ|^α, |yᵢ|^α)
#[derive(Debug, Clone, Copy)]
pub struct GeneralizedHistogramIntersectionKernel {
    alpha: f64,
}

impl GeneralizedHistogramIntersectionKernel {
    /// Creates a generalized histogram intersection kernel
    ///
    /// # Arguments
    /// * `alpha` - Exponent applied to the absolute feature values
    ///
    /// # Panics
    /// Panics if alpha is negative or not finite
    ///
    /// # Examples
    /// ```
    /// use ndarray::array;
    /// use rskernels::kernel::{GeneralizedHistogramIntersectionKernel, Kernel};
    ///
    /// // Signed data is fine: min(|-2|, |1|) + min(|3|, |-1|) = 2
    /// let kernel = GeneralizedHistogramIntersectionKernel::new(1.0);
    /// let k = kernel
    ///     .compute(array![[-2.0, 3.0]].view(), array![[1.0, -1.0]].view())
    ///     .unwrap();
    /// assert_eq!(k[[0, 0]], 2.0);
    /// ```
    pub fn new(alpha: f64) -> Self {
        assert_non_negative("Alpha", alpha);
        Self { alpha }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for GeneralizedHistogramIntersectionKernel {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Kernel for GeneralizedHistogramIntersectionKernel {
    fn name(&self) -> &'static str {
        "GeneralizedHistogramIntersection"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        let alpha = self.alpha;
        let lifted_1 = data_1.mapv(|v| v.abs().powf(alpha));
        let lifted_2 = data_2.mapv(|v| v.abs().powf(alpha));

        // Non-negative by construction, no domain check needed
        Ok(intersection(lifted_1.view(), lifted_2.view()))
    }

    fn dim(&self) -> Dimensionality {
        Dimensionality::Unknown
    }

    fn category(&self) -> KernelCategory {
        KernelCategory::PositiveOnly
    }
}

/// Σᵢ min(xᵢ, yᵢ) for every pair of rows, without a domain check
fn intersection(data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Matrix {
    sum_over_features(data_1, data_2, f64::min)
}
