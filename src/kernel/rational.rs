//! Rational-type distance kernels
//!
//! Kernels built from rational functions of the (squared) Euclidean distance:
//!
//! - Rational quadratic:      K(x, y) = 1 - ||x - y||² / (||x - y||² + c)
//! - Inverse multiquadratic:  K(x, y) = 1 / sqrt(||x - y||² + c²)
//! - Cauchy:                  K(x, y) = 1 / (1 + ||x - y||² / σ²)
//! - T-Student:               K(x, y) = 1 / (1 + ||x - y||^d)

use crate::core::{Dimensionality, Matrix, Result};
use crate::kernel::distance::{euclidean_distances, squared_euclidean_distances};
use crate::kernel::param::{assert_non_negative, assert_positive, LazyScale};
use crate::kernel::traits::Kernel;
use ndarray::ArrayView2;

/// Rational quadratic kernel: K(x, y) = 1 - ||x - y||² / (||x - y||² + c)
#[derive(Debug, Clone, Copy)]
pub struct RationalQuadraticKernel {
    c: f64,
}

impl RationalQuadraticKernel {
    /// # Panics
    /// Panics if c is not positive and finite
    pub fn new(c: f64) -> Self {
        assert_positive("c", c);
        Self { c }
    }

    pub fn c(&self) -> f64 {
        self.c
    }
}

impl Default for RationalQuadraticKernel {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Kernel for RationalQuadraticKernel {
    fn name(&self) -> &'static str {
        "RationalQuadratic"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        let c = self.c;
        let mut dists_sq = squared_euclidean_distances(data_1, data_2);
        dists_sq.mapv_inplace(|d| 1.0 - d / (d + c));
        Ok(dists_sq)
    }

    fn dim(&self) -> Dimensionality {
        Dimensionality::Unknown
    }
}

/// Inverse multiquadratic kernel: K(x, y) = 1 / sqrt(||x - y||² + c²)
///
/// As defined by Micchelli, "Interpolation of scattered data: Distance
/// matrices and conditionally positive definite functions".
#[derive(Debug, Clone, Copy)]
pub struct InverseMultiquadraticKernel {
    /// Stored squared
    c_sq: f64,
}

impl InverseMultiquadraticKernel {
    /// # Panics
    /// Panics if c is not positive and finite
    pub fn new(c: f64) -> Self {
        assert_positive("c", c);
        Self { c_sq: c * c }
    }

    pub fn c(&self) -> f64 {
        self.c_sq.sqrt()
    }
}

impl Default for InverseMultiquadraticKernel {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Kernel for InverseMultiquadraticKernel {
    fn name(&self) -> &'static str {
        "InverseMultiquadratic"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        let c_sq = self.c_sq;
        let mut dists_sq = squared_euclidean_distances(data_1, data_2);
        dists_sq.mapv_inplace(|d| 1.0 / (d + c_sq).sqrt());
        Ok(dists_sq)
    }

    fn dim(&self) -> Dimensionality {
        Dimensionality::Infinite
    }
}

/// Cauchy kernel: K(x, y) = 1 / (1 + ||x - y||² / σ²)
///
/// As defined by Basak, "A least square kernel machine with box constraints".
/// Without an explicit σ, σ² defaults to the number of feature columns.
#[derive(Debug, Clone, Default)]
pub struct CauchyKernel {
    /// Holds σ², or the feature-count default
    sigma_sq: LazyScale,
}

impl CauchyKernel {
    /// Create a Cauchy kernel whose σ² defaults to the feature count
    pub fn new() -> Self {
        Self {
            sigma_sq: LazyScale::unresolved(),
        }
    }

    /// # Panics
    /// Panics if sigma is not positive and finite
    pub fn with_sigma(sigma: f64) -> Self {
        assert_positive("Sigma", sigma);
        Self {
            sigma_sq: LazyScale::fixed(sigma * sigma),
        }
    }

    /// σ², if given or resolved yet
    pub fn sigma_squared(&self) -> Option<f64> {
        self.sigma_sq.get()
    }
}

impl Kernel for CauchyKernel {
    fn name(&self) -> &'static str {
        "Cauchy"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        let sigma_sq = self.sigma_sq.resolve(self.name(), data_1.ncols());
        let mut dists_sq = squared_euclidean_distances(data_1, data_2);
        dists_sq.mapv_inplace(|d| 1.0 / (1.0 + d / sigma_sq));
        Ok(dists_sq)
    }

    fn dim(&self) -> Dimensionality {
        Dimensionality::Infinite
    }
}

/// T-Student kernel: K(x, y) = 1 / (1 + ||x - y||^d)
///
/// As defined by Boughorbel, Tarel and Boujemaa, "Alternative Kernels for
/// Image Recognition".
#[derive(Debug, Clone, Copy)]
pub struct TStudentKernel {
    degree: f64,
}

impl TStudentKernel {
    /// # Panics
    /// Panics if degree is negative or not finite
    pub fn new(degree: f64) -> Self {
        assert_non_negative("Degree", degree);
        Self { degree }
    }

    pub fn degree(&self) -> f64 {
        self.degree
    }
}

impl Default for TStudentKernel {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl Kernel for TStudentKernel {
    fn name(&self) -> &'static str {
        "TStudent"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        let degree = self.degree;
        let mut dists = euclidean_distances(data_1, data_2);
        dists.mapv_inplace(|d| 1.0 / (1.0 + d.powf(degree)));
        Ok(dists)
    }

    fn dim(&self) -> Dimensionality {
        Dimensionality::Unknown
    }
}
