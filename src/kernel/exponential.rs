//! Exponential and Laplacian kernels
//!
//! Both kernels decay exponentially with the (non-squared) Euclidean distance:
//!
//! Exponential: K(x, y) = exp(-||x - y|| / (2σ²))
//! Laplacian:   K(x, y) = exp(-||x - y|| / σ)
//!
//! They share a single formula, [`exponential_decay`], which takes the
//! already-transformed scale. The kernels only differ in whether σ is turned
//! into 2σ² before it is stored. When σ is not given, the stored scale
//! defaults to the number of feature columns of the first input.

use crate::core::{Dimensionality, Matrix, Result};
use crate::kernel::distance::euclidean_distances;
use crate::kernel::param::{assert_positive, LazyScale};
use crate::kernel::traits::Kernel;
use ndarray::ArrayView2;

/// exp(-dist / scale), applied elementwise to a matrix of Euclidean distances
pub fn exponential_decay(mut dists: Matrix, scale: f64) -> Matrix {
    dists.mapv_inplace(|d| (-d / scale).exp());
    dists
}

/// Exponential kernel: K(x, y) = exp(-||x - y|| / (2σ²))
#[derive(Debug, Clone, Default)]
pub struct ExponentialKernel {
    /// Holds 2σ², or the feature-count default
    scale: LazyScale,
}

impl ExponentialKernel {
    /// Create an exponential kernel whose scale defaults to the feature count
    pub fn new() -> Self {
        Self {
            scale: LazyScale::unresolved(),
        }
    }

    /// Create an exponential kernel with bandwidth σ
    ///
    /// # Arguments
    /// * `sigma` - Bandwidth; the formula divides by 2σ²
    ///
    /// # Panics
    /// Panics if sigma is not positive and finite
    ///
    /// # Examples
    /// ```
    /// use rskernels::kernel::ExponentialKernel;
    ///
    /// let kernel = ExponentialKernel::with_sigma(2.0);
    /// assert_eq!(kernel.scale(), Some(8.0));
    ///
    /// // Without σ the scale is taken from the first data seen
    /// assert_eq!(ExponentialKernel::new().scale(), None);
    /// ```
    pub fn with_sigma(sigma: f64) -> Self {
        assert_positive("Sigma", sigma);
        Self {
            scale: LazyScale::fixed(2.0 * sigma * sigma),
        }
    }

    /// Build from a scale that is already in the form the formula divides by
    fn from_scale(scale: LazyScale) -> Self {
        Self { scale }
    }

    /// The effective divisor (2σ² or the resolved default), if known yet
    pub fn scale(&self) -> Option<f64> {
        self.scale.get()
    }

    fn decay(
        &self,
        kernel: &'static str,
        data_1: ArrayView2<f64>,
        data_2: ArrayView2<f64>,
    ) -> Matrix {
        let scale = self.scale.resolve(kernel, data_1.ncols());
        exponential_decay(euclidean_distances(data_1, data_2), scale)
    }
}

impl Kernel for ExponentialKernel {
    fn name(&self) -> &'static str {
        "Exponential"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        Ok(self.decay(self.name(), data_1, data_2))
    }

    fn dim(&self) -> Dimensionality {
        Dimensionality::Infinite
    }
}

/// Laplacian kernel: K(x, y) = exp(-||x - y|| / σ)
///
/// Evaluated by an [`ExponentialKernel`] that stores σ untransformed.
#[derive(Debug, Clone, Default)]
pub struct LaplacianKernel {
    inner: ExponentialKernel,
}

impl LaplacianKernel {
    /// Create a Laplacian kernel whose σ defaults to the feature count
    pub fn new() -> Self {
        Self {
            inner: ExponentialKernel::from_scale(LazyScale::unresolved()),
        }
    }

    /// Create a Laplacian kernel with bandwidth σ
    ///
    /// # Panics
    /// Panics if sigma is not positive and finite
    pub fn with_sigma(sigma: f64) -> Self {
        assert_positive("Sigma", sigma);
        Self {
            inner: ExponentialKernel::from_scale(LazyScale::fixed(sigma)),
        }
    }

    /// σ, if given or resolved yet
    pub fn sigma(&self) -> Option<f64> {
        self.inner.scale()
    }
}

impl Kernel for LaplacianKernel {
    fn name(&self) -> &'static str {
        "Laplacian"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        Ok(self.inner.decay(self.name(), data_1, data_2))
    }

    fn dim(&self) -> Dimensionality {
        self.inner.dim()
    }
}
