//! Conditionally positive definite kernels
//!
//! These kernels are only conditionally positive definite, so they are
//! tagged [`KernelCategory::ConditionallyPositiveDefinite`]. Both are
//! functions of the squared Euclidean distance D = ||x - y||²:
//!
//! - Log:   K(x, y) = -log(D^d / 2 + 1)
//! - Power: K(x, y) = -D^d / 2

use crate::core::{Dimensionality, KernelCategory, Matrix, Result};
use crate::kernel::distance::squared_euclidean_distances;
use crate::kernel::param::assert_non_negative;
use crate::kernel::traits::Kernel;
use ndarray::ArrayView2;

/// Log kernel: K(x, y) = -log(||x - y||²ᵈ / 2 + 1)
#[derive(Debug, Clone, Copy)]
pub struct LogKernel {
    d: f64,
}

impl LogKernel {
    /// # Panics
    /// Panics if d is negative or not finite
    pub fn new(d: f64) -> Self {
        assert_non_negative("Degree", d);
        Self { d }
    }

    pub fn degree(&self) -> f64 {
        self.d
    }
}

impl Default for LogKernel {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl Kernel for LogKernel {
    fn name(&self) -> &'static str {
        "Log"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        let d = self.d;
        let mut dists_sq = squared_euclidean_distances(data_1, data_2);
        dists_sq.mapv_inplace(|dist| -(dist.powf(d) / 2.0 + 1.0).ln());
        Ok(dists_sq)
    }

    fn dim(&self) -> Dimensionality {
        Dimensionality::Unknown
    }

    fn category(&self) -> KernelCategory {
        KernelCategory::ConditionallyPositiveDefinite
    }
}

/// Power kernel: K(x, y) = -||x - y||²ᵈ / 2
///
/// As defined by Sahbi and Fleuret, "Scale-Invariance of Support Vector
/// Machines based on the Triangular Kernel".
#[derive(Debug, Clone, Copy)]
pub struct PowerKernel {
    d: f64,
}

impl PowerKernel {
    /// # Panics
    /// Panics if d is negative or not finite
    pub fn new(d: f64) -> Self {
        assert_non_negative("Degree", d);
        Self { d }
    }

    pub fn degree(&self) -> f64 {
        self.d
    }
}

impl Default for PowerKernel {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl Kernel for PowerKernel {
    fn name(&self) -> &'static str {
        "Power"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        let d = self.d;
        let mut dists_sq = squared_euclidean_distances(data_1, data_2);
        dists_sq.mapv_inplace(|dist| -dist.powf(d) / 2.0);
        Ok(dists_sq)
    }

    fn dim(&self) -> Dimensionality {
        Dimensionality::Unknown
    }

    fn category(&self) -> KernelCategory {
        KernelCategory::ConditionallyPositiveDefinite
    }
}
