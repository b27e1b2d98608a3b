//! Kernel trait definition

use crate::core::{Dimensionality, KernelCategory, KernelError, Matrix, Result};
use log::trace;
use ndarray::ArrayView2;

/// Kernel function trait
///
/// A kernel maps two collections of feature vectors (rows = samples,
/// columns = features) to the matrix of pairwise similarities between them.
/// Implementors provide [`Kernel::evaluate`]; callers use [`Kernel::compute`],
/// which checks the input shapes first.
pub trait Kernel: Send + Sync {
    /// Kernel name, used in logs and error messages
    fn name(&self) -> &'static str;

    /// Apply the kernel formula to inputs already known to share a column count
    ///
    /// Domain checks (e.g. non-negativity) belong here, before any arithmetic.
    fn evaluate(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix>;

    /// Dimension of the implicit feature space
    fn dim(&self) -> Dimensionality;

    /// Mathematical category of the kernel
    fn category(&self) -> KernelCategory {
        KernelCategory::General
    }

    /// Compute the (rows(data_1), rows(data_2)) similarity matrix
    fn compute(&self, data_1: ArrayView2<f64>, data_2: ArrayView2<f64>) -> Result<Matrix> {
        if data_1.ncols() != data_2.ncols() {
            return Err(KernelError::ShapeMismatch {
                expected: data_1.ncols(),
                actual: data_2.ncols(),
            });
        }

        trace!(
            "{} kernel: {:?} x {:?}",
            self.name(),
            data_1.dim(),
            data_2.dim()
        );

        self.evaluate(data_1, data_2)
    }

    /// Gram matrix of a single dataset against itself
    fn gram(&self, data: ArrayView2<f64>) -> Result<Matrix> {
        self.compute(data, data)
    }
}
