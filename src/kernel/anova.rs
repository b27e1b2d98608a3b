//! ANOVA kernel
//!
//! K(x, y) = Σₖ exp(-σ (xₖ - yₖ)²)ᵈ
//!
//! As defined by Hofmann, Schölkopf and Smola, "Kernel methods in machine
//! learning", The Annals of Statistics.

use crate::core::{Dimensionality, Matrix, Result};
use crate::kernel::columns::sum_over_features;
use crate::kernel::param::assert_non_negative;
use crate::kernel::traits::Kernel;
use ndarray::ArrayView2;

/// ANOVA kernel: K(x, y) = Σₖ exp(-σ (xₖ - yₖ)²)ᵈ
#[derive(Debug, Clone, Copy)]
pub struct AnovaKernel {
    sigma: f64,
    d: f64,
}

impl AnovaKernel {
    /// # Panics
    /// Panics if sigma or d is negative or not finite
    pub fn new(sigma: f64, d: f64) -> Self {
        assert_non_negative("Sigma", sigma);
        assert_non_negative("Degree", d);
        Self { sigma, d }
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn degree(&self) -> f64 {
        self.d
    }
}

impl Default for AnovaKernel {
    fn default() -> Self {
        Self::new(1.0, 2.0)
    }
}

impl Kernel for AnovaKernel {
    fn name(&self) -> &'static str {
        "ANOVA"
    }

    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        let (sigma, d) = (self.sigma, self.d);
        Ok(sum_over_features(data_1, data_2, |x, y| {
            let diff = x - y;
            (-sigma * diff * diff).exp().powf(d)
        }))
    }

    fn dim(&self) -> Dimensionality {
        Dimensionality::Unknown
    }
}
