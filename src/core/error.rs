//! Error types for kernel evaluation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    #[error("Shape mismatch: expected {expected} feature columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("{kernel} kernel requires non-negative data, got {value}")]
    DomainViolation { kernel: &'static str, value: f64 },
}

impl KernelError {
    /// Whether the error was caused by the caller's input data
    ///
    /// Both variants currently are; kept as a query so callers can treat
    /// the whole family uniformly.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            KernelError::ShapeMismatch { .. } | KernelError::DomainViolation { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = KernelError::ShapeMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Shape mismatch: expected 3 feature columns, got 2"
        );

        let err = KernelError::DomainViolation {
            kernel: "Min",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Min kernel requires non-negative data, got -1");
        assert!(err.is_invalid_input());
    }
}
