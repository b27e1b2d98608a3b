//! Per-feature accumulation shared by the additive kernels

use crate::core::{KernelError, Matrix, Result};
use log::debug;
use ndarray::{Array2, ArrayView2, Axis, Zip};

/// Sum `f(x_k, y_k)` over the feature columns k for every pair of rows
///
/// Entry (i, j) of the result is Σₖ f(data_1[i, k], data_2[j, k]).
/// Both inputs must have the same number of columns.
pub fn sum_over_features<F>(data_1: ArrayView2<f64>, data_2: ArrayView2<f64>, f: F) -> Matrix
where
    F: Fn(f64, f64) -> f64,
{
    let mut kernel = Array2::zeros((data_1.nrows(), data_2.nrows()));

    for (column_1, column_2) in data_1
        .axis_iter(Axis(1))
        .zip(data_2.axis_iter(Axis(1)))
    {
        Zip::indexed(&mut kernel).for_each(|(i, j), k| *k += f(column_1[i], column_2[j]));
    }

    kernel
}

/// Fail with a domain error on the first negative entry of `data`
pub fn ensure_non_negative(kernel: &'static str, data: ArrayView2<f64>) -> Result<()> {
    match data.iter().find(|&&v| v < 0.0) {
        Some(&value) => {
            debug!("{kernel} kernel: rejecting negative input {value}");
            Err(KernelError::DomainViolation { kernel, value })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sum_over_features() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![[10.0, 20.0]];

        let k = sum_over_features(x.view(), y.view(), |a, b| a * b);
        assert_eq!(k, array![[50.0], [110.0]]);
    }

    #[test]
    fn test_sum_over_no_features() {
        let x = Array2::<f64>::zeros((2, 0));
        let y = Array2::<f64>::zeros((3, 0));

        let k = sum_over_features(x.view(), y.view(), |a, b| a + b);
        assert_eq!(k, Array2::<f64>::zeros((2, 3)));
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("Test", array![[0.0, 1.0]].view()).is_ok());

        let err = ensure_non_negative("Test", array![[0.0, -0.5], [-2.0, 1.0]].view())
            .unwrap_err();
        assert_eq!(
            err,
            KernelError::DomainViolation {
                kernel: "Test",
                value: -0.5
            }
        );
    }
}
